use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};
use crate::template::model::{BorderDecor, PatternTag};

use crate::template::model::BorderDecor as B;
use crate::template::model::PatternTag as P;

/// One greeting candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeGreeting {
    pub line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
}

/// Content and style choices for one occasion.
///
/// Every list is indexed cyclically by template index, so lists may be shorter than the number of
/// templates generated from them. None of them may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub greetings: Vec<ThemeGreeting>,
    pub patterns: Vec<PatternTag>,
    pub gradients: Vec<String>,
    pub border_decors: Vec<BorderDecor>,
    pub emojis: Vec<String>,
    pub name_prefixes: Vec<String>,
}

impl Theme {
    /// Reject empty lists.
    pub fn validate(&self) -> CardResult<()> {
        for (field, len) in [
            ("greetings", self.greetings.len()),
            ("patterns", self.patterns.len()),
            ("gradients", self.gradients.len()),
            ("borderDecors", self.border_decors.len()),
            ("emojis", self.emojis.len()),
            ("namePrefixes", self.name_prefixes.len()),
        ] {
            if len == 0 {
                return Err(CardError::validation(format!(
                    "theme {field} must be non-empty"
                )));
            }
        }
        if self.greetings.iter().any(|g| g.line1.trim().is_empty()) {
            return Err(CardError::validation("theme greeting line1 must be non-empty"));
        }
        Ok(())
    }
}

/// Immutable occasion id -> theme table with a default for unknown occasions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeBook {
    pub occasions: BTreeMap<String, Theme>,
    pub default: Theme,
}

impl ThemeBook {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self {
            occasions: builtin_occasions()
                .into_iter()
                .map(|(id, theme)| (id.to_string(), theme))
                .collect(),
            default: builtin_default(),
        }
    }

    /// Load an alternate table from JSON.
    pub fn from_json(s: &str) -> CardResult<Self> {
        let book: Self = serde_json::from_str(s)?;
        book.validate()?;
        Ok(book)
    }

    /// Serialize the table to JSON.
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every theme including the default.
    pub fn validate(&self) -> CardResult<()> {
        self.default
            .validate()
            .map_err(|e| CardError::validation(format!("default theme: {e}")))?;
        for (id, theme) in &self.occasions {
            theme
                .validate()
                .map_err(|e| CardError::validation(format!("theme '{id}': {e}")))?;
        }
        Ok(())
    }

    /// Theme for `occasion_id`, or the default theme. Never fails.
    pub fn resolve(&self, occasion_id: &str) -> &Theme {
        match self.occasions.get(occasion_id) {
            Some(theme) => theme,
            None => {
                tracing::debug!(occasion_id, "no theme for occasion, using default");
                &self.default
            }
        }
    }

    /// Whether an explicit theme exists.
    pub fn contains(&self, occasion_id: &str) -> bool {
        self.occasions.contains_key(occasion_id)
    }
}

fn theme(
    greetings: &[(&str, &str)],
    patterns: &[PatternTag],
    gradients: &[(u16, &str, &str)],
    border_decors: &[BorderDecor],
    emojis: &[&str],
    name_prefixes: &[&str],
) -> Theme {
    Theme {
        greetings: greetings
            .iter()
            .map(|&(line1, line2)| ThemeGreeting {
                line1: line1.to_string(),
                line2: Some(line2.to_string()),
            })
            .collect(),
        patterns: patterns.to_vec(),
        gradients: gradients
            .iter()
            .map(|&(deg, from, to)| format!("linear-gradient({deg}deg, {from}, {to})"))
            .collect(),
        border_decors: border_decors.to_vec(),
        emojis: emojis.iter().map(|s| s.to_string()).collect(),
        name_prefixes: name_prefixes.iter().map(|s| s.to_string()).collect(),
    }
}

fn builtin_default() -> Theme {
    theme(
        &[
            ("Best Wishes!", "Thinking of You"),
            ("Warm Greetings!", "With Love"),
            ("Special Wishes", "Just for You"),
            ("Heartfelt Wishes!", "You Are Amazing"),
            ("With Love!", "Wishing You Joy"),
        ],
        &[P::Sparkles, P::Stars, P::Dots, P::Floral, P::Hearts, P::None],
        &[
            (135, "#667eea", "#764ba2"),
            (145, "#f093fb", "#f5576c"),
            (135, "#43e97b", "#38f9d7"),
            (135, "#a18cd1", "#fbc2eb"),
            (160, "#ffecd2", "#fcb69f"),
            (135, "#ff9a9e", "#fad0c4"),
            (145, "#4facfe", "#00f2fe"),
            (135, "#fa709a", "#fee140"),
            (135, "#fdcb6e", "#e17055"),
            (145, "#a1c4fd", "#c2e9fb"),
        ],
        &[B::Sparkle, B::Gold, B::None, B::Floral, B::Ribbon, B::Sparkle],
        &["✨", "🌟", "💫", "⭐", "🎉", "💖"],
        &["Dear ", "For ", "To ", "Wishing ", "Hey "],
    )
}

fn builtin_occasions() -> Vec<(&'static str, Theme)> {
    vec![
        (
            "birthday-friend",
            theme(
                &[
                    ("Happy Birthday!", "To My Amazing Friend"),
                    ("🎉 Birthday Bash!", "Party Time, Bestie!"),
                    ("Cheers to You!", "Another Year of Awesomeness"),
                    ("B-Day Vibes!", "You Deserve the Best"),
                    ("Hip Hip Hooray!", "It's Your Special Day"),
                    ("Make a Wish!", "Today is All About You"),
                ],
                &[P::Balloons, P::Confetti, P::Sparkles, P::Stars, P::Ribbons, P::Dots],
                &[
                    (135, "#ff6b6b", "#ee5a24"),
                    (160, "#f093fb", "#f5576c"),
                    (135, "#a29bfe", "#6c5ce7"),
                    (145, "#fd79a8", "#e84393"),
                    (135, "#fdcb6e", "#e17055"),
                    (180, "#ff9a9e", "#fad0c4"),
                    (135, "#667eea", "#764ba2"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#a1c4fd", "#c2e9fb"),
                    (135, "#f5af19", "#f12711"),
                    (160, "#e0c3fc", "#8ec5fc"),
                    (135, "#fa709a", "#fee140"),
                ],
                &[B::Sparkle, B::Ribbon, B::Gold, B::Floral, B::None, B::Sparkle],
                &["🎂", "🎈", "🎁", "🥳", "🎊", "🍰"],
                &["Dear ", "Happy B'day ", "For ", "To ", "Cheers ", "Love to "],
            ),
        ),
        (
            "birthday-brother",
            theme(
                &[
                    ("Happy Birthday Bro!", "Best Brother Ever"),
                    ("To My Brother", "Wishing You Joy & Happiness"),
                    ("Bro's Birthday!", "You Rock, Always"),
                    ("Happy B'day!", "To the Coolest Brother"),
                    ("Birthday Wishes", "For My Dear Brother"),
                ],
                &[P::Confetti, P::Stars, P::Sparkles, P::Balloons, P::Ribbons, P::Dots],
                &[
                    (135, "#667eea", "#764ba2"),
                    (135, "#0984e3", "#6c5ce7"),
                    (145, "#4facfe", "#00f2fe"),
                    (135, "#43e97b", "#38f9d7"),
                    (135, "#fa709a", "#fee140"),
                    (160, "#a1c4fd", "#c2e9fb"),
                    (135, "#f5af19", "#f12711"),
                    (135, "#ffecd2", "#fcb69f"),
                    (145, "#ff9a9e", "#fecfef"),
                    (135, "#6a11cb", "#2575fc"),
                ],
                &[B::Gold, B::Sparkle, B::None, B::Ribbon, B::Gold, B::Sparkle],
                &["🎂", "🎈", "🎁", "⭐", "🎊", "💙"],
                &["Dear ", "Bro ", "For ", "To ", "Hey "],
            ),
        ),
        (
            "birthday-sister",
            theme(
                &[
                    ("Happy Birthday Sis!", "You're My Sunshine"),
                    ("Birthday Princess!", "May All Your Dreams Come True"),
                    ("To My Sweet Sister", "With All My Love"),
                    ("Sparkle & Shine!", "It's Your Day, Sister"),
                    ("Happy B'day!", "Sweetest Sister Ever"),
                ],
                &[P::Floral, P::Hearts, P::Sparkles, P::Stars, P::Ribbons, P::Confetti],
                &[
                    (135, "#fd79a8", "#e84393"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#a29bfe", "#6c5ce7"),
                    (160, "#e0c3fc", "#8ec5fc"),
                    (135, "#ff9a9e", "#fad0c4"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#fbc2eb", "#a6c1ee"),
                    (145, "#fa709a", "#fee140"),
                    (135, "#ff6b6b", "#ee5a24"),
                    (160, "#a18cd1", "#fbc2eb"),
                ],
                &[B::Floral, B::Sparkle, B::Ribbon, B::Gold, B::Floral, B::Sparkle],
                &["🌸", "🎀", "💖", "🦋", "🌺", "✨"],
                &["Dear ", "Sweet ", "For ", "To ", "My "],
            ),
        ),
        (
            "birthday-mother",
            theme(
                &[
                    ("Happy Birthday Mom!", "You Mean the World to Me"),
                    ("To the Best Mom", "Thank You for Everything"),
                    ("Birthday Blessings", "For My Dearest Mother"),
                    ("Happy Birthday!", "To My Superwoman"),
                    ("Mom, You Shine!", "Wishing You All the Happiness"),
                    ("With All My Love", "Happy Birthday, Mom!"),
                ],
                &[P::Floral, P::Hearts, P::Sparkles, P::Dots, P::Stars, P::Waves],
                &[
                    (135, "#f093fb", "#f5576c"),
                    (145, "#fbc2eb", "#a6c1ee"),
                    (135, "#ffecd2", "#fcb69f"),
                    (160, "#ff9a9e", "#fad0c4"),
                    (135, "#a18cd1", "#fbc2eb"),
                    (145, "#fa709a", "#fee140"),
                    (135, "#fdcb6e", "#e17055"),
                    (135, "#e0c3fc", "#8ec5fc"),
                    (135, "#fd79a8", "#e84393"),
                    (145, "#fad0c4", "#ffd1ff"),
                    (135, "#ff6b6b", "#ee5a24"),
                    (160, "#f5af19", "#f12711"),
                ],
                &[B::Floral, B::Gold, B::Sparkle, B::Floral, B::Ribbon, B::Gold],
                &["🌹", "💐", "💖", "👩", "🌺", "🌷"],
                &["Dearest ", "Mom ", "For ", "To ", "My Dear ", "Beloved "],
            ),
        ),
        (
            "birthday-father",
            theme(
                &[
                    ("Happy Birthday Dad!", "My Hero Forever"),
                    ("To the Best Father", "You Are My Strength"),
                    ("Birthday Cheers!", "For My Amazing Dad"),
                    ("Happy Birthday!", "To the World's Best Dad"),
                    ("Dad, You're Great!", "Wishing You Joy"),
                ],
                &[P::Stars, P::Dots, P::Sparkles, P::Confetti, P::Waves, P::None],
                &[
                    (135, "#667eea", "#764ba2"),
                    (135, "#2c3e50", "#3498db"),
                    (145, "#0984e3", "#00b894"),
                    (135, "#f5af19", "#f12711"),
                    (135, "#43e97b", "#38f9d7"),
                    (160, "#4facfe", "#00f2fe"),
                    (135, "#6a11cb", "#2575fc"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#a1c4fd", "#c2e9fb"),
                    (135, "#fdcb6e", "#e17055"),
                ],
                &[B::Gold, B::None, B::Sparkle, B::Gold, B::Ribbon, B::None],
                &["👔", "🏆", "⭐", "💪", "🎩", "❤️"],
                &["Dear ", "Dad ", "For ", "To ", "Papa "],
            ),
        ),
        (
            "birthday-wife",
            theme(
                &[
                    ("Happy Birthday My Love!", "You Complete Me"),
                    ("To My Beautiful Wife", "Forever & Always"),
                    ("Birthday Wishes", "For My Soulmate"),
                    ("You Are My World", "Happy Birthday, Darling!"),
                    ("My Queen!", "Wishing You a Magical Day"),
                    ("Happy Birthday!", "To the Love of My Life"),
                ],
                &[P::Hearts, P::Floral, P::Sparkles, P::Stars, P::Dots, P::Waves],
                &[
                    (135, "#ff6b6b", "#ee5a24"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#fd79a8", "#e84393"),
                    (160, "#e0c3fc", "#8ec5fc"),
                    (135, "#a18cd1", "#fbc2eb"),
                    (145, "#ff9a9e", "#fecfef"),
                    (135, "#fbc2eb", "#a6c1ee"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#fa709a", "#fee140"),
                    (135, "#fad0c4", "#ffd1ff"),
                    (160, "#ff9a9e", "#fad0c4"),
                ],
                &[B::Gold, B::Floral, B::Sparkle, B::Ribbon, B::Gold, B::Floral],
                &["💕", "🌹", "💖", "💎", "🦋", "💗"],
                &["My Love ", "Darling ", "Dear ", "Sweetheart ", "Beloved ", "My "],
            ),
        ),
        (
            "love-valentine",
            theme(
                &[
                    ("Happy Valentine's Day!", "You Are My Forever"),
                    ("Be My Valentine", "Now & Always"),
                    ("I Love You!", "Happy Valentine's Day"),
                    ("My Heart is Yours", "Forever Valentine"),
                    ("Love You to the Moon", "& Back! ❤️"),
                    ("You + Me = ❤️", "Happy Valentine's!"),
                ],
                &[P::Hearts, P::Sparkles, P::Floral, P::Dots, P::Stars, P::Hearts],
                &[
                    (135, "#ff6b6b", "#ee5a24"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#fd79a8", "#e84393"),
                    (135, "#e74c3c", "#c0392b"),
                    (160, "#ff9a9e", "#fad0c4"),
                    (135, "#a18cd1", "#fbc2eb"),
                    (145, "#fbc2eb", "#a6c1ee"),
                    (135, "#fa709a", "#fee140"),
                    (135, "#ff6b6b", "#fad0c4"),
                    (145, "#e0c3fc", "#8ec5fc"),
                    (135, "#f5576c", "#ff6b6b"),
                    (160, "#fad0c4", "#ffd1ff"),
                ],
                &[B::Gold, B::Floral, B::Sparkle, B::Ribbon, B::Gold, B::Floral],
                &["💕", "❤️", "💖", "🌹", "💗", "💘"],
                &["My Love ", "Dearest ", "For ", "To ", "With Love, ", "Forever Yours, "],
            ),
        ),
        (
            "love-anniversary",
            theme(
                &[
                    ("Happy Anniversary!", "To Many More Years Together"),
                    ("Years of Love", "Happy Anniversary, Sweetheart"),
                    ("Together Forever", "Happy Anniversary!"),
                    ("Our Love Story", "Gets Better Every Year"),
                    ("Cheers to Us!", "Happy Anniversary"),
                ],
                &[P::Sparkles, P::Hearts, P::Stars, P::Floral, P::Dots, P::None],
                &[
                    (135, "#f5af19", "#f12711"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#667eea", "#764ba2"),
                    (135, "#a18cd1", "#fbc2eb"),
                    (160, "#ffecd2", "#fcb69f"),
                    (135, "#fdcb6e", "#e17055"),
                    (145, "#fa709a", "#fee140"),
                    (135, "#e0c3fc", "#8ec5fc"),
                    (135, "#fbc2eb", "#a6c1ee"),
                    (145, "#ff9a9e", "#fad0c4"),
                ],
                &[B::Gold, B::Sparkle, B::Ribbon, B::Gold, B::Floral, B::None],
                &["💍", "🥂", "💕", "💖", "🎉", "✨"],
                &["Dearest ", "My Love ", "For ", "To ", "With "],
            ),
        ),
        (
            "love-proposal",
            theme(
                &[
                    ("Will You Marry Me?", "You Make Life Beautiful"),
                    ("I Choose You", "Today & Every Day"),
                    ("Forever Starts Now", "Be Mine?"),
                    ("My Heart Says Yes", "Do Yours? 💍"),
                    ("Love of My Life", "Let's Write Our Story"),
                ],
                &[P::Hearts, P::Sparkles, P::Floral, P::Stars, P::Dots, P::Hearts],
                &[
                    (135, "#fd79a8", "#e84393"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#ff6b6b", "#ee5a24"),
                    (160, "#e0c3fc", "#8ec5fc"),
                    (135, "#fbc2eb", "#a6c1ee"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#a18cd1", "#fbc2eb"),
                    (135, "#fa709a", "#fee140"),
                    (145, "#ff9a9e", "#fad0c4"),
                    (135, "#fad0c4", "#ffd1ff"),
                ],
                &[B::Gold, B::Floral, B::Sparkle, B::Gold, B::Ribbon, B::Floral],
                &["💍", "💐", "💕", "🌹", "💖", "🦋"],
                &["Dearest ", "My ", "For ", "To ", "Beloved "],
            ),
        ),
        (
            "festival-diwali",
            theme(
                &[
                    ("Happy Diwali! 🪔", "Festival of Lights"),
                    ("Shubh Deepavali!", "May Light Guide Your Way"),
                    ("Diwali Blessings", "Joy, Prosperity & Happiness"),
                    ("Happy Diwali!", "Spread Light & Love"),
                    ("Light Up Your Life!", "Wishing You a Bright Diwali"),
                    ("Diwali Greetings!", "May Your Life Shine Bright"),
                    ("Festival of Joy!", "Happy Diwali to You"),
                ],
                &[P::Diyas, P::Sparkles, P::Mandala, P::Rangoli, P::Stars, P::Dots, P::Sparkles],
                &[
                    (135, "#f5af19", "#f12711"),
                    (145, "#fdcb6e", "#e17055"),
                    (135, "#ee5a24", "#f5af19"),
                    (160, "#ffecd2", "#fcb69f"),
                    (135, "#ff6b6b", "#ee5a24"),
                    (145, "#f093fb", "#f5576c"),
                    (135, "#a29bfe", "#6c5ce7"),
                    (135, "#fdcb6e", "#ff6b6b"),
                    (145, "#fa709a", "#fee140"),
                    (135, "#2c3e50", "#f5af19"),
                    (135, "#667eea", "#764ba2"),
                    (160, "#f5af19", "#ee5a24"),
                    (135, "#fad0c4", "#ffd1ff"),
                    (145, "#ff9a9e", "#fecfef"),
                    (135, "#e17055", "#fdcb6e"),
                ],
                &[B::Gold, B::Sparkle, B::Gold, B::Sparkle, B::Gold, B::Floral, B::Sparkle],
                &["🪔", "✨", "🎆", "🎇", "🕯️", "💫", "🌟"],
                &["Dear ", "Wishing ", "For ", "To ", "Blessings to ", "Happy Diwali ", "Shubh Deepavali "],
            ),
        ),
        (
            "festival-holi",
            theme(
                &[
                    ("Happy Holi! 🎨", "Festival of Colors"),
                    ("Rang Barse!", "Happy Holi to You"),
                    ("Colorful Wishes!", "Let the Colors Fly"),
                    ("Holi Hai!", "Play with Joy & Love"),
                    ("Splash of Colors!", "Happy Holi"),
                    ("Paint the World!", "With Love & Colors"),
                ],
                &[P::Confetti, P::Sparkles, P::Dots, P::Stars, P::Waves, P::Confetti],
                &[
                    (135, "#ff6b6b", "#fdcb6e"),
                    (145, "#a29bfe", "#fd79a8"),
                    (135, "#55efc4", "#fdcb6e"),
                    (160, "#f093fb", "#74b9ff"),
                    (135, "#ff9a9e", "#a29bfe"),
                    (145, "#fdcb6e", "#55efc4"),
                    (135, "#fd79a8", "#74b9ff"),
                    (135, "#6c5ce7", "#ff6b6b"),
                    (145, "#00b894", "#fdcb6e"),
                    (135, "#e84393", "#fdcb6e"),
                    (160, "#74b9ff", "#fd79a8"),
                    (135, "#ff6b6b", "#00b894"),
                ],
                &[B::Sparkle, B::Ribbon, B::None, B::Sparkle, B::Gold, B::Ribbon],
                &["🎨", "🌈", "💜", "💚", "💛", "🎊"],
                &["Dear ", "Hey ", "For ", "To ", "Happy Holi ", "Colors for "],
            ),
        ),
        (
            "festival-christmas",
            theme(
                &[
                    ("Merry Christmas! 🎄", "Joy to the World"),
                    ("Season's Greetings!", "Wishing You Peace & Joy"),
                    ("Ho Ho Ho!", "Merry Christmas"),
                    ("Christmas Blessings", "Love, Joy & Peace"),
                    ("Jingle All the Way!", "Merry Christmas to You"),
                    ("Silent Night", "Holy Night ✨"),
                ],
                &[P::Snowflakes, P::Stars, P::Sparkles, P::Dots, P::Snowflakes, P::Stars],
                &[
                    (135, "#c0392b", "#27ae60"),
                    (145, "#2c3e50", "#c0392b"),
                    (135, "#27ae60", "#2ecc71"),
                    (160, "#e74c3c", "#f5af19"),
                    (135, "#2c3e50", "#3498db"),
                    (145, "#c0392b", "#e74c3c"),
                    (135, "#1abc9c", "#2c3e50"),
                    (135, "#e74c3c", "#27ae60"),
                    (145, "#3498db", "#2c3e50"),
                    (135, "#27ae60", "#f5af19"),
                    (160, "#c0392b", "#2c3e50"),
                    (135, "#f5af19", "#c0392b"),
                ],
                &[B::Gold, B::Sparkle, B::Ribbon, B::Gold, B::Sparkle, B::None],
                &["🎄", "⭐", "🎅", "🎁", "❄️", "🔔"],
                &["Dear ", "Merry Christmas ", "For ", "To ", "Blessings to ", "Season's joy "],
            ),
        ),
        (
            "festival-eid",
            theme(
                &[
                    ("Eid Mubarak! 🌙", "Blessed Celebrations"),
                    ("Happy Eid!", "May Peace Be Upon You"),
                    ("Eid Greetings", "Joy & Prosperity"),
                    ("Eid Mubarak!", "Wishing You Happiness"),
                    ("Blessed Eid!", "May Allah Bless You"),
                ],
                &[P::Crescents, P::Stars, P::Mandala, P::Dots, P::Sparkles, P::Crescents],
                &[
                    (135, "#2c3e50", "#1abc9c"),
                    (145, "#667eea", "#764ba2"),
                    (135, "#f5af19", "#2c3e50"),
                    (160, "#0984e3", "#00b894"),
                    (135, "#6c5ce7", "#a29bfe"),
                    (145, "#00b894", "#0984e3"),
                    (135, "#2c3e50", "#f5af19"),
                    (135, "#1abc9c", "#6c5ce7"),
                    (145, "#f5af19", "#ee5a24"),
                    (135, "#764ba2", "#667eea"),
                ],
                &[B::Gold, B::Sparkle, B::Gold, B::None, B::Sparkle, B::Gold],
                &["🌙", "⭐", "🕌", "✨", "🌟", "🤲"],
                &["Dear ", "Blessings to ", "For ", "To ", "Eid Mubarak "],
            ),
        ),
        (
            "festival-sankranti",
            theme(
                &[
                    ("Happy Sankranti! 🪁", "Harvest of Happiness"),
                    ("Happy Pongal!", "Wishing You Prosperity"),
                    ("Sankranti Wishes", "Joy & Good Fortune"),
                    ("Fly High! 🪁", "Happy Makar Sankranti"),
                    ("Uttarayan Greetings!", "Let Your Spirits Soar"),
                ],
                &[P::Dots, P::Sparkles, P::Waves, P::Stars, P::Confetti, P::None],
                &[
                    (135, "#f5af19", "#fdcb6e"),
                    (145, "#55efc4", "#00b894"),
                    (135, "#fdcb6e", "#ee5a24"),
                    (160, "#74b9ff", "#0984e3"),
                    (135, "#e17055", "#fdcb6e"),
                    (145, "#00b894", "#fdcb6e"),
                    (135, "#fdcb6e", "#f5af19"),
                    (135, "#0984e3", "#74b9ff"),
                    (145, "#e17055", "#f5af19"),
                    (135, "#f5af19", "#00b894"),
                ],
                &[B::Gold, B::Sparkle, B::None, B::Gold, B::Ribbon, B::Sparkle],
                &["🪁", "☀️", "🌾", "✨", "🎊", "🌅"],
                &["Dear ", "Wishing ", "For ", "To ", "Happy Sankranti "],
            ),
        ),
        (
            "motivation-success",
            theme(
                &[
                    ("You're a Winner! 🏆", "Keep Shining"),
                    ("Success Awaits!", "Believe in Yourself"),
                    ("Dream Big!", "Achieve Bigger"),
                    ("Rise & Conquer!", "You've Got This"),
                    ("Champion!", "Nothing Can Stop You"),
                ],
                &[P::Stars, P::Sparkles, P::Dots, P::Waves, P::None, P::Stars],
                &[
                    (135, "#f5af19", "#f12711"),
                    (145, "#667eea", "#764ba2"),
                    (135, "#43e97b", "#38f9d7"),
                    (160, "#4facfe", "#00f2fe"),
                    (135, "#6a11cb", "#2575fc"),
                    (145, "#0984e3", "#00b894"),
                    (135, "#2c3e50", "#3498db"),
                    (135, "#ee5a24", "#f5af19"),
                    (145, "#a1c4fd", "#c2e9fb"),
                    (135, "#fdcb6e", "#e17055"),
                ],
                &[B::Gold, B::Sparkle, B::None, B::Gold, B::Sparkle, B::Ribbon],
                &["🏆", "⭐", "💪", "🚀", "🔥", "👑"],
                &["Go ", "Champion ", "Dear ", "To ", "Hey "],
            ),
        ),
        (
            "motivation-goodmorning",
            theme(
                &[
                    ("Good Morning! ☀️", "Rise & Shine"),
                    ("New Day, New Hope!", "Make It Amazing"),
                    ("Hello Sunshine!", "Have a Beautiful Day"),
                    ("Morning Vibes! 🌅", "Stay Positive"),
                    ("Wake Up & Smile!", "Today is Your Day"),
                    ("Fresh Start!", "Good Morning to You"),
                ],
                &[P::Dots, P::Waves, P::Sparkles, P::Stars, P::None, P::Dots],
                &[
                    (135, "#f5af19", "#fdcb6e"),
                    (145, "#ffecd2", "#fcb69f"),
                    (135, "#43e97b", "#38f9d7"),
                    (160, "#a1c4fd", "#c2e9fb"),
                    (135, "#74b9ff", "#0984e3"),
                    (145, "#ff9a9e", "#fad0c4"),
                    (135, "#55efc4", "#00b894"),
                    (135, "#fdcb6e", "#e17055"),
                    (145, "#81ecec", "#00cec9"),
                    (135, "#ffeaa7", "#fdcb6e"),
                    (160, "#ffecd2", "#fcb69f"),
                    (135, "#00b894", "#55efc4"),
                ],
                &[B::None, B::Sparkle, B::Gold, B::None, B::Sparkle, B::Ribbon],
                &["☀️", "🌅", "🌻", "🌈", "☕", "🌸"],
                &["Dear ", "Good Morning ", "Hey ", "To ", "Rise & Shine ", "Morning "],
            ),
        ),
        (
            "motivation-quotes",
            theme(
                &[
                    ("Stay Inspired! ✨", "The Best is Yet to Come"),
                    ("Keep Going!", "Great Things Take Time"),
                    ("Be Fearless!", "Your Potential is Limitless"),
                    ("Shine Bright!", "You're a Star"),
                    ("Never Give Up!", "Believe & Achieve"),
                ],
                &[P::Stars, P::Sparkles, P::Dots, P::Waves, P::None, P::Stars],
                &[
                    (135, "#667eea", "#764ba2"),
                    (145, "#6a11cb", "#2575fc"),
                    (135, "#43e97b", "#38f9d7"),
                    (160, "#4facfe", "#00f2fe"),
                    (135, "#f5af19", "#f12711"),
                    (145, "#0984e3", "#00b894"),
                    (135, "#a29bfe", "#6c5ce7"),
                    (135, "#2c3e50", "#3498db"),
                    (145, "#a1c4fd", "#c2e9fb"),
                    (135, "#ee5a24", "#f5af19"),
                ],
                &[B::Sparkle, B::Gold, B::None, B::Sparkle, B::Gold, B::None],
                &["✨", "💫", "⭐", "🌟", "💡", "🔥"],
                &["Dear ", "For ", "To ", "Hey ", "Champion "],
            ),
        ),
        (
            "religious-ganesh",
            theme(
                &[
                    ("Ganpati Bappa Morya!", "Happy Ganesh Chaturthi"),
                    ("Blessings of Ganesha", "Wisdom & Prosperity"),
                    ("Happy Ganesh Chaturthi!", "May Lord Ganesha Bless You"),
                    ("Shree Ganeshaya Namah!", "Festival of New Beginnings"),
                    ("Ganapati Blessings", "Remove All Obstacles"),
                    ("Jai Ganesh!", "Wishing You Happiness"),
                ],
                &[P::Mandala, P::Floral, P::Dots, P::Sparkles, P::Rangoli, P::Mandala],
                &[
                    (135, "#f5af19", "#ee5a24"),
                    (145, "#fdcb6e", "#e17055"),
                    (135, "#ff6b6b", "#f5af19"),
                    (160, "#ffecd2", "#fcb69f"),
                    (135, "#e17055", "#fdcb6e"),
                    (145, "#f5af19", "#fdcb6e"),
                    (135, "#ee5a24", "#f5af19"),
                    (135, "#2c3e50", "#f5af19"),
                    (145, "#ff6b6b", "#ee5a24"),
                    (135, "#fdcb6e", "#ff6b6b"),
                    (160, "#e17055", "#f5af19"),
                    (135, "#f5af19", "#ff6b6b"),
                ],
                &[B::Gold, B::Floral, B::Gold, B::Sparkle, B::Gold, B::Floral],
                &["🐘", "🙏", "🪔", "✨", "🌺", "💫"],
                &["Dear ", "Blessings to ", "For ", "To ", "Jai Ganesh! Dear ", "Ganpati Bappa "],
            ),
        ),
        (
            "religious-navratri",
            theme(
                &[
                    ("Happy Navratri! 🔱", "9 Nights of Devotion"),
                    ("Jai Mata Di!", "Navratri Blessings"),
                    ("Navratri Wishes", "Victory of Good Over Evil"),
                    ("Shubh Navratri!", "Celebrate with Joy"),
                    ("Dandiya Night!", "Happy Navratri"),
                ],
                &[P::Mandala, P::Floral, P::Sparkles, P::Rangoli, P::Dots, P::Mandala],
                &[
                    (135, "#ff6b6b", "#f5af19"),
                    (145, "#e17055", "#fdcb6e"),
                    (135, "#fd79a8", "#e84393"),
                    (160, "#f5af19", "#ee5a24"),
                    (135, "#fdcb6e", "#ff6b6b"),
                    (145, "#a29bfe", "#6c5ce7"),
                    (135, "#f093fb", "#f5576c"),
                    (135, "#ee5a24", "#fdcb6e"),
                    (145, "#ff6b6b", "#fd79a8"),
                    (135, "#e84393", "#a29bfe"),
                ],
                &[B::Gold, B::Floral, B::Sparkle, B::Gold, B::Floral, B::Gold],
                &["🔱", "🙏", "🪔", "💃", "✨", "🌺"],
                &["Dear ", "Blessings to ", "For ", "To ", "Jai Mata Di! "],
            ),
        ),
        (
            "religious-ram-navami",
            theme(
                &[
                    ("Happy Ram Navami!", "Jai Shri Ram 🏹"),
                    ("Ram Navami Blessings", "Dharma & Truth Prevail"),
                    ("Jai Shri Ram!", "Wishing You Strength"),
                    ("Shubh Ram Navami!", "Victory of Righteousness"),
                    ("Ram Navami Wishes", "Lord Ram Bless You"),
                ],
                &[P::Mandala, P::Sparkles, P::Floral, P::Rangoli, P::Dots, P::Stars],
                &[
                    (135, "#f5af19", "#ee5a24"),
                    (145, "#fdcb6e", "#e17055"),
                    (135, "#ff6b6b", "#f5af19"),
                    (160, "#2c3e50", "#f5af19"),
                    (135, "#e17055", "#fdcb6e"),
                    (145, "#ee5a24", "#f5af19"),
                    (135, "#fdcb6e", "#ff6b6b"),
                    (135, "#f5af19", "#2c3e50"),
                    (145, "#e17055", "#f5af19"),
                    (135, "#ff6b6b", "#ee5a24"),
                ],
                &[B::Gold, B::Sparkle, B::Gold, B::Floral, B::Gold, B::Sparkle],
                &["🏹", "🙏", "✨", "🪔", "🌺", "💫"],
                &["Dear ", "Blessings to ", "For ", "To ", "Jai Shri Ram! "],
            ),
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/template/theme.rs"]
mod tests;
