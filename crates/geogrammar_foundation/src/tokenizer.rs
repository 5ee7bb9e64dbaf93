//! Input segmentation.
//!
//! Splits raw text into words, numbers and punctuation marks with byte spans.
//! This is the segmentation half of the reference analyzer; production
//! deployments feed tokens from their own analyzer instead.

/// What kind of text a segment holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Letters, possibly joined by inner hyphens (`северо-западный`, `пр-кт`)
    Word,
    /// A run of ASCII digits
    Number,
    /// A single punctuation or symbol character
    Punct,
}

/// A segment of input text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The segment text, borrowed from the input
    pub text: &'a str,
    /// Byte offset of the first character
    pub start: usize,
    /// The kind of segment
    pub kind: SegmentKind,
}

impl Segment<'_> {
    /// Byte offset one past the last character.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }
}

/// Splits input text into segments.
pub struct Tokenizer;

impl Tokenizer {
    /// Segments a raw input string.
    ///
    /// - Whitespace separates segments and is dropped
    /// - A hyphen between two letters stays inside the word
    /// - Digits and letters never share a segment (`1-я` is three segments)
    /// - Every other character is a punctuation segment of its own
    #[must_use]
    pub fn segment(input: &str) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut chars = input.char_indices().peekable();

        while let Some((start, ch)) = chars.next() {
            if ch.is_whitespace() {
                continue;
            }

            let kind = if ch.is_alphabetic() {
                SegmentKind::Word
            } else if ch.is_ascii_digit() {
                SegmentKind::Number
            } else {
                SegmentKind::Punct
            };

            let mut end = start + ch.len_utf8();
            let mut prev = ch;
            match kind {
                SegmentKind::Word => {
                    while let Some(&(idx, c)) = chars.peek() {
                        let joins = c == '-'
                            && prev.is_alphabetic()
                            && input[idx + 1..].chars().next().is_some_and(char::is_alphabetic);
                        if !(c.is_alphabetic() || joins) {
                            break;
                        }
                        chars.next();
                        end = idx + c.len_utf8();
                        prev = c;
                    }
                }
                SegmentKind::Number => {
                    while let Some(&(idx, c)) = chars.peek() {
                        if !c.is_ascii_digit() {
                            break;
                        }
                        chars.next();
                        end = idx + c.len_utf8();
                    }
                }
                SegmentKind::Punct => {}
            }

            segments.push(Segment {
                text: &input[start..end],
                start,
                kind,
            });
        }

        segments
    }
}
