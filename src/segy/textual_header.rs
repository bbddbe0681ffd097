//! The 3200-byte textual reel header.
//!
//! The header is 40 "card images" of 80 columns each. Lines C01 to C22 follow
//! the layout recommended by the Revision 1 standard, C23 to C37 are free for
//! provenance text, C39 identifies the revision and C40 closes the header.
//!
//! This crate writes the ASCII variant of the header.

use super::SegYRevision;

/// Number of lines in the textual header.
pub const TEXTUAL_HEADER_LINES: usize = 40;

/// Number of columns per line.
pub const TEXTUAL_HEADER_COLUMNS: usize = 80;

/// Size of the textual reel header in bytes.
pub const TEXTUAL_REEL_HEADER_LEN: usize = TEXTUAL_HEADER_LINES * TEXTUAL_HEADER_COLUMNS;

/// Number of free-text lines available between the standard fields and the
/// trailer (C23 to C37).
pub const UNASSIGNED_LINES: usize = 15;

/// A fully laid out textual header.
///
/// Every line is exactly [`TEXTUAL_HEADER_COLUMNS`] ASCII characters wide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextualReelHeader {
    lines: Vec<String>,
}

impl TextualReelHeader {
    /// Builds a header from raw line contents (without the `Cnn ` prefix).
    ///
    /// Missing lines are left blank, surplus lines are dropped, and each line
    /// is truncated or padded to 80 columns after prefixing.
    pub fn from_lines<S: AsRef<str>>(contents: &[S]) -> Self {
        let lines = (0..TEXTUAL_HEADER_LINES)
            .map(|i| {
                let text = contents.get(i).map(|s| s.as_ref()).unwrap_or("");
                card_image(i + 1, text)
            })
            .collect();
        Self { lines }
    }

    /// The 40 formatted lines, each 80 columns wide.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn to_bytes(&self) -> [u8; TEXTUAL_REEL_HEADER_LEN] {
        let mut buf = [b' '; TEXTUAL_REEL_HEADER_LEN];
        for (i, line) in self.lines.iter().enumerate() {
            let start = i * TEXTUAL_HEADER_COLUMNS;
            buf[start..start + TEXTUAL_HEADER_COLUMNS].copy_from_slice(line.as_bytes());
        }
        buf
    }
}

/// Values substituted into the standard textual header template.
#[derive(Clone, Debug)]
pub struct StandardTextualFields<'a> {
    pub revision: SegYRevision,
    pub samples_per_trace: usize,
    pub sample_interval: f64,
    pub bytes_per_sample: usize,
    pub measurement_system: &'a str,
    pub trace_sorting: &'a str,
    pub map_projection: &'a str,
    pub zone_id: &'a str,
    pub coordinate_units: &'a str,
    /// Free text for lines C23 onwards; at most [`UNASSIGNED_LINES`] are used.
    pub unassigned: Vec<String>,
}

/// Lays out the standard Revision 1 textual header.
pub fn format_standard_textual_header(fields: &StandardTextualFields<'_>) -> TextualReelHeader {
    let mut contents: Vec<String> = vec![
        "CLIENT                        COMPANY                       CREW NO".into(),
        "LINE            AREA                        MAP ID".into(),
        "REEL NO           DAY-START OF REEL     YEAR      OBSERVER".into(),
        "INSTRUMENT: MFG            MODEL            SERIAL NO".into(),
        "DATA TRACES/RECORD        AUXILIARY TRACES/RECORD         CDP FOLD".into(),
        format!(
            "SAMPLE INTERVAL {} SAMPLES/TRACE {} BYTES/SAMPLE {}",
            fields.sample_interval, fields.samples_per_trace, fields.bytes_per_sample
        ),
        format!(
            "RECORDING FORMAT        FORMAT THIS REEL SEG Y  MEASUREMENT SYSTEM {}",
            fields.measurement_system
        ),
        "SAMPLE CODE: FLOATING PT     FIXED PT     FIXED PT-GAIN     CORRELATED".into(),
        "GAIN  TYPE: FIXED     BINARY     FLOATING POINT     OTHER".into(),
        "FILTERS: ALIAS     HZ, NOTCH     HZ, BAND     -     HZ, SLOPE    -    DB/OCT".into(),
        "SOURCE: TYPE            NUMBER/POINT        POINT INTERVAL".into(),
        "    PATTERN:                           LENGTH        WIDTH".into(),
        "SWEEP: START     HZ  END     HZ  LENGTH      MS  CHANNEL NO     TYPE".into(),
        "TAPER: START LENGTH       MS  END LENGTH       MS  TYPE".into(),
        "SPREAD: OFFSET        MAX DISTANCE        GROUP INTERVAL".into(),
        "GEOPHONES: PER GROUP     SPACING     FREQUENCY     MFG          MODEL".into(),
        "    PATTERN:                           LENGTH        WIDTH".into(),
        format!("TRACES SORTED BY: {}", fields.trace_sorting),
        "AMPLITUDE RECOVERY: NONE      SPHERICAL DIV       AGC    OTHER".into(),
        format!(
            "MAP PROJECTION {}  ZONE ID {}  COORDINATE UNITS {}",
            fields.map_projection, fields.zone_id, fields.coordinate_units
        ),
        "PROCESSING:".into(),
        "PROCESSING:".into(),
    ];

    for i in 0..UNASSIGNED_LINES {
        contents.push(fields.unassigned.get(i).cloned().unwrap_or_default());
    }

    contents.push(String::new());
    contents.push(fields.revision.label().to_string());
    contents.push("END TEXTUAL HEADER".to_string());

    TextualReelHeader::from_lines(&contents)
}

/// Formats one 80-column line: `Cnn ` followed by ASCII text.
fn card_image(line_number: usize, text: &str) -> String {
    let mut line = format!("C{:02} ", line_number);
    line.extend(
        text.chars()
            .map(|c| if c.is_ascii() && !c.is_ascii_control() { c } else { '?' }),
    );
    let mut line: String = line.chars().take(TEXTUAL_HEADER_COLUMNS).collect();
    while line.len() < TEXTUAL_HEADER_COLUMNS {
        line.push(' ');
    }
    line
}
