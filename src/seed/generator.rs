//! Synthetic user and task values.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;

/// Longest title the generator produces (the column is `VARCHAR(100)`).
pub const MAX_TITLE_CHARS: usize = 100;

/// Longest description the generator produces.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Random source for fake names, emails and task text.
pub struct Generator<R: Rng> {
    rng: R,
}

impl<R: Rng> Generator<R> {
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// A human-readable full name.
    pub fn fullname(&mut self) -> String {
        Name().fake_with_rng(&mut self.rng)
    }

    /// An email address. Not guaranteed unique.
    pub fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    /// `email` with a random number appended to its local part.
    pub fn email_variant(&mut self, email: &str) -> String {
        let n: u32 = self.rng.gen_range(1..1_000_000);
        match email.split_once('@') {
            Some((local, domain)) => format!("{local}{n}@{domain}"),
            None => format!("{email}{n}"),
        }
    }

    /// A four-word sentence.
    pub fn title(&mut self) -> String {
        let sentence: String = Sentence(4..5).fake_with_rng(&mut self.rng);
        truncate_words(&sentence, MAX_TITLE_CHARS)
    }

    /// Free text of at most [`MAX_DESCRIPTION_CHARS`] characters.
    pub fn description(&mut self) -> String {
        let text: String = Paragraph(1..4).fake_with_rng(&mut self.rng);
        truncate_words(&text, MAX_DESCRIPTION_CHARS)
    }

    /// Uniform pick from a non-empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.rng.gen_range(0..items.len()))
    }
}

/// Shorten `text` to at most `max` characters, cutting at the last space
/// when one is available.
fn truncate_words(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let cut: String = text.chars().take(max).collect();
    match cut.rfind(' ') {
        Some(idx) if idx > 0 => cut[..idx].trim_end().to_string(),
        _ => cut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> Generator<StdRng> {
        Generator::new(StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_truncate_words_short_text_untouched() {
        assert_eq!(truncate_words("short text", 20), "short text");
    }

    #[test]
    fn test_truncate_words_cuts_at_space() {
        assert_eq!(truncate_words("alpha beta gamma", 12), "alpha beta");
        assert_eq!(truncate_words("abcdefghij", 4), "abcd");
    }

    #[test]
    fn test_generated_text_is_bounded() {
        let mut faker = generator();
        for _ in 0..50 {
            assert!(faker.title().chars().count() <= MAX_TITLE_CHARS);
            assert!(faker.description().chars().count() <= MAX_DESCRIPTION_CHARS);
        }
    }

    #[test]
    fn test_email_variant_keeps_domain() {
        let mut faker = generator();
        let variant = faker.email_variant("ann@example.com");
        assert!(variant.starts_with("ann"));
        assert!(variant.ends_with("@example.com"));
        assert_ne!(variant, "ann@example.com");
    }

    #[test]
    fn test_pick() {
        let mut faker = generator();
        let empty: [i64; 0] = [];
        assert!(faker.pick(&empty).is_none());

        let items = [1, 2, 3];
        for _ in 0..20 {
            assert!(items.contains(faker.pick(&items).unwrap()));
        }
    }

    #[test]
    fn test_same_seed_same_values() {
        let mut a = generator();
        let mut b = generator();
        assert_eq!(a.fullname(), b.fullname());
        assert_eq!(a.email(), b.email());
        assert_eq!(a.title(), b.title());
    }
}
