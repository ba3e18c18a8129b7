// Primer shimmer indicator
// ░▒▓█ gradient bar that shifts 1 cell per beat, shown next to "in progress"
// labels such as "Learning..." and "Analyzing..."

/// Progress indicator: a label followed by a moving gradient bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shimmer {
    label: &'static str,
    /// Width of the bar in characters
    width: usize,
}

impl Shimmer {
    /// The gradient characters, from darkest to lightest
    const PATTERN: [char; 4] = ['█', '▓', '▒', '░'];

    pub const fn new(label: &'static str) -> Self {
        Self { label, width: 8 }
    }

    pub const fn with_width(self, width: usize) -> Self {
        Self {
            label: self.label,
            width,
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    /// The bar for a given beat.
    /// Shifts left by 1 cell per beat, which reads as rightward motion.
    pub fn bar(&self, beat: u64) -> String {
        let pattern_len = Self::PATTERN.len();
        let offset = (beat % pattern_len as u64) as usize;
        (0..self.width)
            .map(|i| Self::PATTERN[(i + offset) % pattern_len])
            .collect()
    }

    pub fn render(&self, beat: u64) -> String {
        format!("{} {}", self.label, self.bar(beat))
    }
}
