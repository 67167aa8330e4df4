use super::{Catalog, MatchMode, Quote};

const QUOTES: &[Quote] = &[
    Quote::new("motivation", "Push yourself, because no one else is going to do it for you."),
    Quote::new("motivation", "Success doesn’t just find you. You have to go out and get it."),
    Quote::new("motivation", "Great things never come from comfort zones."),
    Quote::new("life", "Life is what happens when you're busy making other plans."),
    Quote::new("life", "Get busy living or get busy dying."),
    Quote::new("life", "Life is really simple, but we insist on making it complicated."),
    Quote::new("friendship", "A real friend is one who walks in when the rest of the world walks out."),
    Quote::new("friendship", "Friendship is the only cement that will ever hold the world together."),
    Quote::new("friendship", "True friendship comes when the silence between two people is comfortable."),
];

pub static CATALOG: Catalog = Catalog {
    name: "nexium",
    title: "Nexium Quote Generator App",
    match_mode: MatchMode::Exact,
    quotes: QUOTES,
};
