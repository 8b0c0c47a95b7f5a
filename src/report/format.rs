//! Section markers

/// Written after every section body, and between the tree and the sections.
pub const SECTION_SEPARATOR: &str = "\n\n";

const MARKER_OPEN: &str = "----- ";
const MARKER_CLOSE: &str = " -----";

/// The header line that opens a file section, including its newline.
pub fn section_marker(relative_path: &str) -> String {
    format!("{MARKER_OPEN}{relative_path}{MARKER_CLOSE}\n")
}

/// One file section recovered from a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

/// Split a report into its file sections.
///
/// A section runs from its marker line to the next marker line, minus the
/// trailing separator. File contents that themselves contain a line shaped
/// like a marker will be split there.
pub fn split_sections(report: &str) -> Vec<Section<'_>> {
    // (marker start, content start, path)
    let mut markers = Vec::new();
    let mut offset = 0;
    for line in report.split_inclusive('\n') {
        if let Some(path) = parse_marker(line) {
            markers.push((offset, offset + line.len(), path));
        }
        offset += line.len();
    }

    markers
        .iter()
        .enumerate()
        .map(|(i, &(_, start, path))| {
            let end = markers.get(i + 1).map_or(report.len(), |m| m.0);
            let body = &report[start..end];
            Section {
                path,
                content: body.strip_suffix(SECTION_SEPARATOR).unwrap_or(body),
            }
        })
        .collect()
}

fn parse_marker(line: &str) -> Option<&str> {
    line.strip_suffix('\n')?
        .strip_prefix(MARKER_OPEN)?
        .strip_suffix(MARKER_CLOSE)
}
