use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Openers that frame the paraphrase as reflective listening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, IntoStaticStr)]
pub enum LeadIn {
    #[strum(serialize = "It sounds like ")]
    SoundsLike,
    #[strum(serialize = "I understand, so ")]
    Understand,
    #[strum(serialize = "I get a sense that ")]
    SenseThat,
    #[strum(serialize = "It seems like ")]
    SeemsLike,
    #[strum(serialize = "I see, so ")]
    See,
}

impl LeadIn {
    pub const ALL: [LeadIn; 5] = [
        LeadIn::SoundsLike,
        LeadIn::Understand,
        LeadIn::SenseThat,
        LeadIn::SeemsLike,
        LeadIn::See,
    ];

    pub fn phrase(self) -> &'static str {
        self.into()
    }

    pub fn choose<S: PhraseSelector + ?Sized>(selector: &mut S) -> LeadIn {
        let idx = selector.select(Self::ALL.len()) % Self::ALL.len();
        Self::ALL[idx]
    }
}

/// Source of lead-in choices. Returns an index in `0..count`.
pub trait PhraseSelector {
    fn select(&mut self, count: usize) -> usize;
}

impl PhraseSelector for fastrand::Rng {
    fn select(&mut self, count: usize) -> usize {
        self.usize(..count)
    }
}

/// Prefixes `text` with a lead-in drawn from `selector`.
pub fn prepend_lead_in<S: PhraseSelector + ?Sized>(selector: &mut S, text: &str) -> String {
    let lead_in = LeadIn::choose(selector);
    format!("{}{}", lead_in.phrase(), text)
}
