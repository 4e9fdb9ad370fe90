//! Static grids and word streams used across harnesses.
//!
//! Each fixture is a `(&[row], &[word])` pair with a known ranked answer
//! noted alongside it.

/// Three rows, each word once. Ties resolve alphabetically:
/// `["chill", "cold", "wind"]`.
pub const CHILL_GRID: &[&str] = &["chill", "coldw", "windd"];
pub const CHILL_WORDS: &[&str] = &["chill", "cold", "wind"];

/// Nothing in `CHILL_WORDS` appears here.
pub const FLAT_GRID: &[&str] = &["aaaa", "bbbb", "cccc"];

/// "hello" runs down column 0.
pub const HELLO_COLUMN_GRID: &[&str] = &["hxxxx", "exxxx", "lxxxx", "lxxxx", "oxxxx"];

/// Column words with distinct counts: top=3, usa=2, mix=1.
pub const COLUMN_RANK_GRID: &[&str] = &["tumtut", "osioso", "paxpap"];
pub const COLUMN_RANK_WORDS: &[&str] = &["top", "usa", "mix"];

/// Row words with distinct counts: hello=5, world=5, test=1, rainbow=0.
pub const ROW_RANK_GRID: &[&str] = &[
    "hellohelloworldworld",
    "hellohelloworldworld",
    "hellotestworldrainbo",
];
pub const ROW_RANK_WORDS: &[&str] = &["hello", "world", "test", "rainbow"];

/// Twelve matching words; "moon" and "tree" (once each) fall off the top ten,
/// "analysis" never matches.
pub const TOP_TEN_GRID: &[&str] = &[
    "hellohello",
    "teststests",
    "worldworld",
    "sunoosunoo",
    "foxxxfoxxx",
    "birdqbirdq",
    "dataadataa",
    "rocksrocks",
    "catsscatss",
    "dogssdogss",
    "moonnasdfg",
    "treeeeeeee",
];
pub const TOP_TEN_WORDS: &[&str] = &[
    "hello", "world", "test", "fox", "tree", "bird", "rock", "cat", "dog", "sun", "moon", "data",
    "analysis",
];
pub const TOP_TEN_EXPECTED: &[&str] = &[
    "bird", "cat", "data", "dog", "fox", "hello", "rock", "sun", "test", "world",
];

/// A 64×64 grid: the largest the HTTP layer accepts.
pub fn max_grid() -> Vec<String> {
    (0..64)
        .map(|r| {
            (0..64)
                .map(|c| char::from(b'a' + ((r * 7 + c * 3) % 26) as u8))
                .collect()
        })
        .collect()
}
