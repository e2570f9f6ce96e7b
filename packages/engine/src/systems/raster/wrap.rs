//! Greedy word wrap and block placement
//!
//! Words are split on single spaces and every line keeps its trailing space,
//! so the measured width of a line is the width of `words + " "`. A line
//! closes right before the word that would push it past the max width.
//!
//! Line slots are addressed by line index and never compacted. If the very
//! first word already overflows, the break happens before it and slot 0 is
//! left unassigned: it draws nothing but still takes one line of spacing.

/// Wrapped lines by slot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WrappedText {
    slots: Vec<Option<String>>,
}

impl WrappedText {
    pub fn line_count(&self) -> usize {
        self.slots.len()
    }

    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// Assigned lines only, in order
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().filter_map(|s| s.as_deref())
    }
}

pub fn wrap_words<F>(text: &str, max_width: f32, mut measure: F) -> WrappedText
where
    F: FnMut(&str) -> f32,
{
    let mut slots: Vec<Option<String>> = Vec::new();
    if text.is_empty() {
        return WrappedText { slots };
    }

    let mut line_index = 0usize;
    let mut line = String::new();

    for word in text.split(' ') {
        let candidate = format!("{line}{word} ");
        if measure(&candidate) > max_width {
            line = format!("{word} ");
            line_index += 1;
        } else {
            line = candidate;
        }
        if slots.len() <= line_index {
            slots.resize(line_index + 1, None);
        }
        slots[line_index] = Some(line.clone());
    }

    WrappedText { slots }
}

/// A line positioned on the canvas
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub center_x: f32,
    pub top_y: f32,
}

/// Wrapped text centered on the canvas
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextLayout {
    pub lines: Vec<PlacedLine>,
    pub line_count: usize,
    pub line_height: f32,
}

impl TextLayout {
    /// Lines are positioned by their top edge, not their baseline: the first
    /// top is `H/2 - line_count * line_height / 2`, which centers the whole
    /// block. Backends draw with a top baseline to match.
    pub fn place(wrapped: &WrappedText, canvas_width: u32, canvas_height: u32, line_height: f32) -> Self {
        let line_count = wrapped.line_count();
        let total_height = line_count as f32 * line_height;
        let first_top = canvas_height as f32 / 2.0 - total_height / 2.0;
        let center_x = canvas_width as f32 / 2.0;

        let lines = wrapped
            .slots()
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.as_ref().map(|text| PlacedLine {
                    text: text.clone(),
                    center_x,
                    top_y: first_top + index as f32 * line_height,
                })
            })
            .collect();

        Self {
            lines,
            line_count,
            line_height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every character is 10px wide
    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    #[test]
    fn empty_text_has_no_lines() {
        let wrapped = wrap_words("", 100.0, mono);
        assert_eq!(wrapped.line_count(), 0);
        assert_eq!(wrapped.lines().count(), 0);
    }

    #[test]
    fn breaks_before_the_first_overflowing_word() {
        // "aaa " = 40, "aaa bb " = 70, "aaa bb cccc " = 120 > 100
        let wrapped = wrap_words("aaa bb cccc d", 100.0, mono);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["aaa bb ", "cccc d "]);
    }

    #[test]
    fn fits_exactly_at_max_width() {
        // "aaaa " = 50, "aaaa bbbb " = 100, not greater than 100
        let wrapped = wrap_words("aaaa bbbb", 100.0, mono);
        assert_eq!(wrapped.lines().collect::<Vec<_>>(), vec!["aaaa bbbb "]);
    }

    #[test]
    fn overflowing_first_word_leaves_slot_zero_unassigned() {
        let wrapped = wrap_words("abcdefghijkl xy", 100.0, mono);
        assert_eq!(wrapped.line_count(), 3);
        assert_eq!(wrapped.slots()[0], None);
        assert_eq!(wrapped.slots()[1].as_deref(), Some("abcdefghijkl "));
        assert_eq!(wrapped.slots()[2].as_deref(), Some("xy "));
    }

    #[test]
    fn zero_width_puts_every_word_on_its_own_line() {
        let wrapped = wrap_words("a b c", 0.0, mono);
        assert_eq!(wrapped.line_count(), 4);
        assert_eq!(wrapped.lines().collect::<Vec<_>>(), vec!["a ", "b ", "c "]);
    }

    #[test]
    fn block_is_vertically_centered() {
        let wrapped = wrap_words("aaa bbb", 40.0, mono);
        let layout = TextLayout::place(&wrapped, 200, 300, 80.0);
        assert_eq!(layout.line_count, 2);
        // total = 160, first top = 150 - 80 = 70
        assert_eq!(layout.lines[0].top_y, 70.0);
        assert_eq!(layout.lines[1].top_y, 150.0);
        assert!(layout.lines.iter().all(|l| l.center_x == 100.0));
    }

    #[test]
    fn unassigned_slot_still_takes_spacing() {
        let wrapped = wrap_words("abcdefghijkl", 50.0, mono);
        let layout = TextLayout::place(&wrapped, 100, 200, 40.0);
        assert_eq!(layout.line_count, 2);
        assert_eq!(layout.lines.len(), 1);
        // first top = 100 - 40 = 60, slot 1 sits one line below
        assert_eq!(layout.lines[0].top_y, 100.0);
    }
}
