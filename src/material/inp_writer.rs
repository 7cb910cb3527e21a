/// Assembles the lines of INP material records
///
/// The first line is a comment (`** ...`) describing the batch. Lines are joined by
/// a newline character and the resulting text has no trailing newline.
///
/// ```text
/// ** <VonMises instance: 1 samples>
/// *MATERIAL, NAME=mat
/// *ELASTIC
///   1.0, 0.3
/// *PLASTIC
///   0.01, 0.0
/// ```
pub struct InpWriter {
    lines: Vec<String>,
}

impl InpWriter {
    /// Allocates a new instance with a comment line
    pub fn new(comment: &str) -> Self {
        InpWriter {
            lines: vec![format!("** {}", comment)],
        }
    }

    /// Starts a new material record
    pub fn material(&mut self, name: &str) -> &mut Self {
        self.lines.push(format!("*MATERIAL, NAME={}", name));
        self
    }

    /// Adds a keyword line such as `*ELASTIC`
    pub fn keyword(&mut self, keyword: &str) -> &mut Self {
        self.lines.push(format!("*{}", keyword));
        self
    }

    /// Adds a data line with comma-separated values
    pub fn data(&mut self, values: &[f64]) -> &mut Self {
        let items: Vec<_> = values.iter().map(|v| format_value(*v)).collect();
        self.lines.push(format!("  {}", items.join(", ")));
        self
    }

    /// Adds the `*ELASTIC` keyword followed by (E, ν)
    pub fn elastic(&mut self, young: f64, poisson: f64) -> &mut Self {
        self.keyword("ELASTIC").data(&[young, poisson])
    }

    /// Returns the text
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Formats a value using the shortest representation that reads back to the same float
pub fn format_value(value: f64) -> String {
    format!("{:?}", value)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
