use super::{Catalog, MatchMode, Quote};

const QUOTES: &[Quote] = &[
    Quote::new("inspiration", "The best way to get started is to quit talking and begin doing."),
    Quote::new("inspiration", "Don't let yesterday take up too much of today."),
    Quote::new("inspiration", "It's not whether you get knocked down, it's whether you get up."),
    Quote::new("success", "Success is not final, failure is not fatal: It is the courage to continue that counts."),
    Quote::new("success", "Success usually comes to those who are too busy to be looking for it."),
    Quote::new("success", "Don't be afraid to give up the good to go for the great."),
    Quote::new("life", "Life is what happens when you're busy making other plans."),
    Quote::new("life", "Get busy living or get busy dying."),
    Quote::new("life", "You only live once, but if you do it right, once is enough."),
];

pub static CATALOG: Catalog = Catalog {
    name: "inspiration",
    title: "Quote Generator",
    match_mode: MatchMode::Substring,
    quotes: QUOTES,
};
