use std::fmt;
use std::time::Duration;
use lazy_static::lazy_static;
use nx_core::{Error, Result, Translator};
use regex::Regex;
use crate::Config;

/// English term to Urdu replacement, applied in this order.
/// An empty replacement deletes the term.
pub const URDU_DICTIONARY: &[(&str, &str)] = &[
    ("web development", "ویب ڈیولپمنٹ"),
    ("technology", "ٹیکنالوجی"),
    ("framework", "فریم ورک"),
    ("react", "ری ایکٹ"),
    ("vue", "ویو"),
    ("typescript", "ٹائپ اسکرپٹ"),
    ("javascript", "جاوا اسکرپٹ"),
    ("performance", "کارکردگی"),
    ("application", "ایپلیکیشن"),
    ("server", "سرور"),
    ("database", "ڈیٹابیس"),
    ("api", "اے پی آئی"),
    ("frontend", "فرنٹ اینڈ"),
    ("backend", "بیک اینڈ"),
    ("css", "سی ایس ایس"),
    ("html", "ایچ ٹی ایم ایل"),
    ("component", "کمپوننٹ"),
    ("developer", "ڈیولپر"),
    ("modern", "جدید"),
    ("tools", "ٹولز"),
    ("trends", "رجحانات"),
    ("innovation", "اختراع"),
    ("future", "مستقبل"),
    ("scalable", "قابل توسیع"),
    ("experience", "تجربہ"),
    ("accessibility", "رسائی"),
    ("optimization", "بہتری"),
    ("and", "اور"),
    ("the", ""),
    ("is", "ہے"),
    ("are", "ہیں"),
    ("with", "کے ساتھ"),
    ("for", "کے لیے"),
    ("in", "میں"),
    ("of", "کا"),
    ("to", "کو"),
    ("more", "زیادہ"),
    ("new", "نیا"),
    ("making", "بنانا"),
    ("building", "بنانا"),
    ("creating", "بنانا"),
    ("fast", "تیز"),
    ("quality", "معیار"),
    ("code", "کوڈ"),
    ("important", "اہم"),
    ("popular", "مقبول"),
    ("becoming", "بننا"),
    ("gaining", "حاصل کرنا"),
    ("improved", "بہتر"),
    ("flexible", "لچکدار"),
    ("alternative", "متبادل"),
    ("providing", "فراہم کرنا"),
    ("capabilities", "صلاحیات"),
    ("focused", "مرکوز"),
    ("inclusive", "شامل"),
];

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

/// Word-for-word substitution against a fixed dictionary.
pub struct DictionaryTranslator {
    name: &'static str,
    rules: Vec<Rule>,
    latency: Duration,
}

impl fmt::Debug for DictionaryTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictionaryTranslator")
            .field("name", &self.name)
            .field("rules", &self.rules.len())
            .field("latency", &self.latency)
            .finish()
    }
}

impl DictionaryTranslator {
    pub fn new(
        name: &'static str,
        dictionary: &[(&'static str, &'static str)],
        config: Option<Config>,
    ) -> Result<Self> {
        let config = config.unwrap_or_default();
        let rules = dictionary
            .iter()
            .map(|&(term, replacement)| {
                let pattern = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(term)))
                    .map_err(|e| Error::Translation(format!("Invalid dictionary term {:?}: {}", term, e)))?;
                Ok(Rule { pattern, replacement })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name,
            rules,
            latency: config.latency_or_zero(Duration::from_millis(200)),
        })
    }

    pub fn urdu(config: Option<Config>) -> Result<Self> {
        Self::new("urdu", URDU_DICTIONARY, config)
    }

    /// Lowercase, substitute every whole-word dictionary term, then collapse whitespace.
    pub fn translate_text(&self, text: &str) -> String {
        let mut translated = text.to_lowercase();
        for rule in &self.rules {
            translated = rule
                .pattern
                .replace_all(&translated, regex::NoExpand(rule.replacement))
                .into_owned();
        }
        WHITESPACE.replace_all(&translated, " ").trim().to_string()
    }
}

#[async_trait::async_trait]
impl Translator for DictionaryTranslator {
    fn name(&self) -> &str {
        self.name
    }

    async fn translate(&self, text: &str) -> Result<String> {
        tokio::time::sleep(self.latency).await;
        Ok(self.translate_text(text))
    }
}
