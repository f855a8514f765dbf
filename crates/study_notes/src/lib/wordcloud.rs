//! Frequency-weighted word cloud rendering for generated notes.

use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use itertools::Itertools;

const MIN_FONT_SIZE: f32 = 14.0;
const MAX_FONT_SIZE: f32 = 72.0;
const MARGIN: u32 = 10;
const WORD_GAP: u32 = 12;
const ROW_GAP: u32 = 6;

// matplotlib tab10, minus the light shades that wash out on white
const PALETTE: [Rgb<u8>; 6] = [
    Rgb([31, 119, 180]),
    Rgb([255, 127, 14]),
    Rgb([44, 160, 44]),
    Rgb([214, 39, 40]),
    Rgb([148, 103, 189]),
    Rgb([140, 86, 75]),
];

const STOPWORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "his", "him", "she", "they", "them", "their", "this", "that", "with",
    "from", "have", "will", "would", "could", "should", "what", "when", "where", "which", "who",
    "whom", "than", "then", "there", "here", "how", "why", "its", "it's", "been", "being", "were",
    "into", "about", "also", "just", "like", "some", "such", "only", "over", "very", "more",
    "most", "other", "each", "because", "these", "those", "your",
];

pub struct WordCloud {
    font: FontVec,
    width: u32,
    height: u32,
    background: Rgb<u8>,
    max_words: usize,
}

impl WordCloud {
    /// Builds a word cloud renderer from raw TTF/OTF font bytes.
    pub fn new(font_data: Vec<u8>) -> anyhow::Result<Self> {
        let font = FontVec::try_from_vec(font_data)
            .map_err(|e| anyhow::anyhow!("Invalid font data: {e}"))?;

        Ok(WordCloud {
            font,
            width: 800,
            height: 400,
            background: Rgb([255, 255, 255]),
            max_words: 60,
        })
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    /// Renders the text's most frequent words, scaled by relative frequency
    /// and laid out greedily in rows until the canvas runs out.
    pub fn generate(&self, text: &str) -> RgbImage {
        let mut image = RgbImage::from_pixel(self.width, self.height, self.background);

        let frequencies = word_frequencies(text);
        let Some(&(_, top_count)) = frequencies.first() else {
            return image;
        };

        let mut x = MARGIN;
        let mut y = MARGIN;
        let mut row_height = 0u32;

        for (i, (word, count)) in frequencies.iter().take(self.max_words).enumerate() {
            let size = MIN_FONT_SIZE
                + (MAX_FONT_SIZE - MIN_FONT_SIZE) * (*count as f32 / top_count as f32);
            let scale = PxScale::from(size);
            let (w, h) = text_size(scale, &self.font, word);

            if x + w > self.width.saturating_sub(MARGIN) && x > MARGIN {
                x = MARGIN;
                y += row_height + ROW_GAP;
                row_height = 0;
            }
            if y + h > self.height.saturating_sub(MARGIN) {
                break;
            }

            let color = PALETTE[i % PALETTE.len()];
            draw_text_mut(&mut image, color, x as i32, y as i32, scale, &self.font, word);

            x += w + WORD_GAP;
            row_height = row_height.max(h);
        }

        image
    }
}

/// Counts how often each word occurs, most frequent first. Case-folded,
/// punctuation-split, with stopwords and words shorter than three characters
/// dropped. Ties break alphabetically so the layout is deterministic.
pub fn word_frequencies(text: &str) -> Vec<(String, usize)> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric() && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| w.len() >= 3 && !STOPWORDS.contains(w))
        .map(str::to_string)
        .counts()
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)))
        .collect()
}
