// Types a phrase out one character at a time, holds it, deletes it, then
// moves on to the next phrase, forever.

pub const DEFAULT_PHRASES: &[&str] = &[
    "Cloud Computing",
    "Big Data Analytics",
    "AI / ML Enthusiast",
    "Full-Stack Developer",
    "Research Intern @ IIT KGP",
];

#[derive(Clone, Debug, PartialEq)]
pub struct TypewriterFrame {
    pub text: String,
    /// How long to wait before the next tick.
    pub delay_ms: u32,
}

pub struct Typewriter {
    phrases: Vec<String>,
    phrase_idx: usize,
    char_idx: isize,
    deleting: bool,
}

impl Typewriter {
    pub const TYPE_MS: u32 = 70;
    pub const DELETE_MS: u32 = 35;
    pub const HOLD_MS: u32 = 2000;
    pub const NEXT_PHRASE_MS: u32 = 400;

    pub fn new<I, S>(phrases: I) -> Typewriter
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Typewriter {
            phrases: phrases.into_iter().map(Into::into).collect(),
            phrase_idx: 0,
            char_idx: 0,
            deleting: false,
        }
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_idx
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn tick(&mut self) -> TypewriterFrame {
        let current = match self.phrases.get(self.phrase_idx) {
            Some(phrase) => phrase,
            None => {
                return TypewriterFrame {
                    text: String::new(),
                    delay_ms: Typewriter::NEXT_PHRASE_MS,
                }
            }
        };
        let len = current.chars().count() as isize;
        let shown = self.char_idx.max(0).min(len) as usize;
        let text: String = current.chars().take(shown).collect();

        let mut delay_ms = if self.deleting {
            self.char_idx -= 1;
            Typewriter::DELETE_MS
        } else {
            self.char_idx += 1;
            Typewriter::TYPE_MS
        };

        if !self.deleting && self.char_idx > len {
            delay_ms = Typewriter::HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_idx < 0 {
            self.deleting = false;
            self.phrase_idx = (self.phrase_idx + 1) % self.phrases.len();
            delay_ms = Typewriter::NEXT_PHRASE_MS;
        }

        TypewriterFrame { text, delay_ms }
    }
}

impl Default for Typewriter {
    fn default() -> Self {
        Typewriter::new(DEFAULT_PHRASES.iter().copied())
    }
}
