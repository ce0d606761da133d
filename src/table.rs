// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rendering grouped observation summaries as an AASTeX deluxetable fragment.

use std::io::Write;

use indexmap::IndexMap;

use crate::constants::DEDUP_CELL;
use crate::summary::ObservationSummary;

/// Write `groups` (band label -> rows, in insertion order) as a
/// `deluxetable*` fragment, with the boilerplate header and footer blocks
/// included on request.
///
/// Within one band group, a row whose project code equals the previous row's
/// has that cell collapsed to a non-breaking placeholder; if the P.I. also
/// matches, that cell is collapsed too. The comparison looks one row back
/// only, and resets at every group boundary, so the same project code in two
/// different bands renders in full both times.
pub fn write_table<W: Write>(
    buf: &mut W,
    groups: &IndexMap<String, Vec<ObservationSummary>>,
    header: bool,
    footer: bool,
) -> Result<(), std::io::Error> {
    if header {
        writeln!(buf, r"\begin{{deluxetable*}}{{cccccc}}")?;
        writeln!(
            buf,
            r"\tablecaption{{Summary of ALMA Observations. \label{{tab:obs}}}}"
        )?;
        writeln!(buf, r"\tablewidth{{0pt}}")?;
        writeln!(buf, r"\tablehead{{")?;
        writeln!(
            buf,
            r"\colhead{{Project}} & \colhead{{P.I.}} & \colhead{{Date}} & \colhead{{On-source}} & \colhead{{Baselines}} & \colhead{{Frequencies}}\\"
        )?;
        writeln!(
            buf,
            r"\colhead{{Code}} & \colhead{{}} & \colhead{{}} & \colhead{{time (min)}} & \colhead{{(m)}} & \colhead{{(GHz)\tablenotemark{{a}}}} "
        )?;
        writeln!(buf, r"}}")?;
        writeln!(buf, r"\startdata")?;
    }

    for (band_label, rows) in groups {
        writeln!(buf, r"\hline")?;
        writeln!(buf, r"\multicolumn{{6}}{{c}}{{{band_label}}} \\")?;
        writeln!(buf, r"\hline")?;

        let mut last_project: Option<&Option<String>> = None;
        let mut last_pi: Option<&str> = None;

        for row in rows {
            let mut project_cell = row.project_code.as_deref().unwrap_or("");
            let mut pi_cell = row.pi.as_str();
            if last_project == Some(&row.project_code) {
                project_cell = DEDUP_CELL;
                if last_pi == Some(row.pi.as_str()) {
                    pi_cell = DEDUP_CELL;
                }
            }

            writeln!(
                buf,
                r"{} & {} & {} & {} & {} & {} \\",
                project_cell,
                pi_cell,
                row.date,
                row.on_source_time,
                row.baselines,
                row.frequencies
            )?;

            last_project = Some(&row.project_code);
            last_pi = Some(&row.pi);
        }
    }

    if footer {
        writeln!(buf, r"\enddata")?;
        writeln!(
            buf,
            r"\tablenotetext{{a}}{{Mean frequency of spectral windows.}}"
        )?;
        writeln!(buf, r"\end{{deluxetable*}}")?;
    }

    Ok(())
}
