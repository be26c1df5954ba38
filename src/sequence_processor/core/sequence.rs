/// Stand-in byte for characters outside ASCII. It classifies as "other" and
/// keeps one byte per character, so positions in text input stay per-char.
const NON_ASCII_PLACEHOLDER: u8 = b'?';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    pub data: Vec<u8>,
    pub id: Option<String>,
}

impl Sequence {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data, id: None }
    }

    pub fn from_text(text: &str) -> Self {
        let data = if text.is_ascii() {
            text.as_bytes().to_vec()
        } else {
            text.chars()
                .map(|c| if c.is_ascii() { c as u8 } else { NON_ASCII_PLACEHOLDER })
                .collect()
        };
        Self::new(data)
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
