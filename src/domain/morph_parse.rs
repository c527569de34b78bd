#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
    Infinitive,
    Numeral,
    Preposition,
    Conjunction,
    Other,
}

impl PartOfSpeech {
    pub fn from_grammeme(grammeme: &str) -> Option<Self> {
        match grammeme {
            "NOUN" => Some(Self::Noun),
            "ADJF" | "ADJS" => Some(Self::Adjective),
            "VERB" => Some(Self::Verb),
            "INFN" => Some(Self::Infinitive),
            "NUMR" => Some(Self::Numeral),
            "PREP" => Some(Self::Preposition),
            "CONJ" => Some(Self::Conjunction),
            "PRTF" | "PRTS" | "GRND" | "COMP" | "ADVB" | "NPRO" | "PRED" | "PRCL" | "INTJ" => {
                Some(Self::Other)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalCase {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Locative,
    Vocative,
}

impl GrammaticalCase {
    pub fn from_grammeme(grammeme: &str) -> Option<Self> {
        match grammeme {
            "nomn" => Some(Self::Nominative),
            "gent" | "gen2" => Some(Self::Genitive),
            "datv" => Some(Self::Dative),
            "accs" | "acc2" => Some(Self::Accusative),
            "ablt" => Some(Self::Instrumental),
            "loct" | "loc2" => Some(Self::Locative),
            "voct" => Some(Self::Vocative),
            _ => None,
        }
    }

    pub fn as_grammeme(&self) -> &'static str {
        match self {
            Self::Nominative => "nomn",
            Self::Genitive => "gent",
            Self::Dative => "datv",
            Self::Accusative => "accs",
            Self::Instrumental => "ablt",
            Self::Locative => "loct",
            Self::Vocative => "voct",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrammaticalNumber {
    Singular,
    Plural,
}

impl GrammaticalNumber {
    pub fn from_grammeme(grammeme: &str) -> Option<Self> {
        match grammeme {
            "sing" => Some(Self::Singular),
            "plur" => Some(Self::Plural),
            _ => None,
        }
    }

    pub fn as_grammeme(&self) -> &'static str {
        match self {
            Self::Singular => "sing",
            Self::Plural => "plur",
        }
    }
}

/// Grammatical tag of one parse, reduced to the grammemes the lemma
/// selection looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MorphTag {
    pub pos: Option<PartOfSpeech>,
    pub case: Option<GrammaticalCase>,
    pub number: Option<GrammaticalNumber>,
    raw: String,
}

impl MorphTag {
    /// Parses an OpenCorpora-style tag such as `NOUN,inan,masc sing,nomn`.
    /// Unknown grammemes are kept only in the raw form.
    pub fn parse(raw: &str) -> Self {
        let mut tag = Self {
            raw: raw.trim().to_string(),
            ..Self::default()
        };

        for grammeme in raw.split([',', ' ']).filter(|g| !g.is_empty()) {
            if tag.pos.is_none() {
                tag.pos = PartOfSpeech::from_grammeme(grammeme);
            }
            if tag.case.is_none() {
                tag.case = GrammaticalCase::from_grammeme(grammeme);
            }
            if tag.number.is_none() {
                tag.number = GrammaticalNumber::from_grammeme(grammeme);
            }
        }

        tag
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_noun(&self) -> bool {
        self.pos == Some(PartOfSpeech::Noun)
    }

    pub fn has_form(&self, case: GrammaticalCase, number: GrammaticalNumber) -> bool {
        self.case == Some(case) && self.number == Some(number)
    }

    pub fn is_nominative_singular_noun(&self) -> bool {
        self.is_noun()
            && self.has_form(GrammaticalCase::Nominative, GrammaticalNumber::Singular)
    }
}

/// One candidate analysis of a word, as returned by a morphological analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphParse {
    pub word: String,
    pub normal_form: String,
    pub tag: MorphTag,
    pub score: f32,
}

impl MorphParse {
    pub fn new(
        word: impl Into<String>,
        normal_form: impl Into<String>,
        tag: &str,
        score: f32,
    ) -> Self {
        Self {
            word: word.into(),
            normal_form: normal_form.into(),
            tag: MorphTag::parse(tag),
            score,
        }
    }
}
