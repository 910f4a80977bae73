//! Static achievement catalog.
//!
//! Every badge the engine can award is declared exactly once in the
//! `achievement_catalog!` invocation below. The macro generates the
//! [`AchievementType`] enum, its snake_case tags, and the display data
//! (icon, title, description, color, rarity) consumed by the UI. Catalog
//! order is evaluation order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{OptionExt, Result, TripError};

/// Display weighting of a badge. Static, never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Badge family. Families are evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Movement,
    TimeOfDay,
    DaySpan,
    PhotoCount,
    Geography,
    DayOfWeek,
    Special,
}

/// Display data for one achievement type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementInfo {
    #[serde(rename = "type")]
    pub achievement_type: AchievementType,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Hex color, e.g. `#E53935`
    pub color: &'static str,
    pub rarity: Rarity,
    pub category: Category,
}

macro_rules! achievement_catalog {
    (
        $(
            $category:ident {
                $(
                    $variant:ident => $tag:literal, $icon:literal, $title:literal,
                        $color:literal, $rarity:ident, $description:literal;
                )*
            }
        )*
    ) => {
        /// Closed set of achievement types.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum AchievementType {
            $($(
                #[doc = $description]
                $variant,
            )*)*
        }

        impl AchievementType {
            /// Every type, in evaluation order.
            pub const ALL: &'static [AchievementType] = &[
                $($( AchievementType::$variant, )*)*
            ];

            /// Stable snake_case tag, as stored and sent to the UI.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($( AchievementType::$variant => $tag, )*)*
                }
            }
        }

        static CATALOG: &[AchievementInfo] = &[
            $($(
                AchievementInfo {
                    achievement_type: AchievementType::$variant,
                    icon: $icon,
                    title: $title,
                    description: $description,
                    color: $color,
                    rarity: Rarity::$rarity,
                    category: Category::$category,
                },
            )*)*
        ];
    };
}

achievement_catalog! {
    Movement {
        SpeedDemon => "speed_demon", "🏎️", "Speed Demon", "#E53935", Uncommon,
            "Moved faster than 100 km/h between two photos.";
        Teleporter => "teleporter", "⚡", "Teleporter", "#8E24AA", Rare,
            "Moved faster than 150 km/h between two photos.";
        JetSetter => "jet_setter", "✈️", "Jet Setter", "#1E88E5", Epic,
            "Moved faster than 500 km/h between two photos.";
        SnailPace => "snail_pace", "🐌", "Snail Pace", "#7CB342", Uncommon,
            "Averaged under 1 km/h over a trip of at least an hour.";
        CruiseControl => "cruise_control", "🚗", "Cruise Control", "#546E7A", Common,
            "Averaged between 40 and 120 km/h over at least an hour.";
        Explorer => "explorer", "🧭", "Explorer", "#43A047", Common,
            "Covered at least 10 km.";
        HalfMarathon => "half_marathon", "🏃", "Half Marathon", "#FB8C00", Uncommon,
            "Covered more than a half marathon (21.1 km).";
        MarathonRunner => "marathon_runner", "🏅", "Marathon Runner", "#F4511E", Rare,
            "Covered more than 42 km.";
        RoadTripper => "road_tripper", "🛣️", "Road Tripper", "#6D4C41", Uncommon,
            "Covered at least 100 km.";
        LongHauler => "long_hauler", "🚛", "Long Hauler", "#5D4037", Rare,
            "Covered at least 500 km.";
        GlobeTrotter => "globe_trotter", "🌍", "Globe Trotter", "#00897B", Epic,
            "Covered at least 1000 km.";
        HighAltitude => "high_altitude", "🏔️", "High Altitude", "#90A4AE", Uncommon,
            "Took a photo above 2000 m.";
        Mountaineer => "mountaineer", "🧗", "Mountaineer", "#607D8B", Epic,
            "Took a photo above 4000 m.";
        BelowSeaLevel => "below_sea_level", "🌊", "Below Sea Level", "#0277BD", Rare,
            "Took a photo below sea level.";
        Climber => "climber", "⛰️", "Climber", "#795548", Rare,
            "Photos span at least 1000 m of altitude.";
    }

    TimeOfDay {
        DawnPatrol => "dawn_patrol", "🌌", "Dawn Patrol", "#3949AB", Uncommon,
            "Took a photo between 4 and 5 AM.";
        EarlyBird => "early_bird", "🐦", "Early Bird", "#FFB300", Common,
            "Took a photo between 5 and 7 AM.";
        LunchBreak => "lunch_break", "🥪", "Lunch Break", "#C0CA33", Common,
            "Took a photo between noon and 1 PM.";
        SunsetChaser => "sunset_chaser", "🌇", "Sunset Chaser", "#FF7043", Common,
            "Took a photo between 6 and 8 PM.";
        MidnightSnapper => "midnight_snapper", "🕛", "Midnight Snapper", "#283593", Uncommon,
            "Took a photo in the midnight hour.";
        NightOwl => "night_owl", "🦉", "Night Owl", "#1A237E", Rare,
            "Took a photo between 2 and 4 AM.";
        RoundTheClock => "round_the_clock", "🕰️", "Round the Clock", "#5E35B1", Rare,
            "Took photos in at least 12 different hours of the day.";
        NineToFive => "nine_to_five", "💼", "Nine to Five", "#78909C", Common,
            "Every photo was taken between 9 AM and 5 PM.";
    }

    DaySpan {
        DayTripper => "day_tripper", "🎒", "Day Tripper", "#26A69A", Common,
            "Several photos, all on the same day.";
        Overnighter => "overnighter", "🛏️", "Overnighter", "#5C6BC0", Common,
            "A trip spanning two calendar days.";
        LongWeekend => "long_weekend", "🏖️", "Long Weekend", "#FFCA28", Uncommon,
            "A trip spanning at least 3 days.";
        WeekTraveler => "week_traveler", "🧳", "Week Traveler", "#29B6F6", Rare,
            "A trip spanning at least 7 days.";
        Fortnight => "fortnight", "🗓️", "Fortnight", "#0288D1", Rare,
            "A trip spanning at least 14 days.";
        MonthAdventurer => "month_adventurer", "🌏", "Month Adventurer", "#00695C", Epic,
            "A trip spanning at least 30 days.";
        SeasonSpanner => "season_spanner", "🍂", "Season Spanner", "#BF360C", Legendary,
            "A trip spanning at least 90 days.";
        DailyDiarist => "daily_diarist", "📔", "Daily Diarist", "#8D6E63", Rare,
            "Photos on every day of a trip of at least 3 days.";
        QuickSnap => "quick_snap", "⏱️", "Quick Snap", "#9CCC65", Common,
            "A trip shorter than an hour.";
        HourJourney => "hour_journey", "⌛", "Hour Journey", "#66BB6A", Common,
            "A trip lasting between 1 and 6 hours.";
        HalfDay => "half_day", "🌤️", "Half Day", "#FFA726", Common,
            "A trip lasting between 6 and 12 hours.";
        FullDay => "full_day", "☀️", "Full Day", "#FF9800", Uncommon,
            "A trip lasting between 12 and 24 hours.";
        MultiDay => "multi_day", "📅", "Multi Day", "#EF6C00", Uncommon,
            "A trip lasting at least 24 hours.";
    }

    PhotoCount {
        OneShot => "one_shot", "🎯", "One Shot", "#EC407A", Uncommon,
            "A trip with exactly one photo.";
        Duo => "duo", "✌️", "Duo", "#AB47BC", Common,
            "A trip with exactly two photos.";
        Trio => "trio", "🔺", "Trio", "#7E57C2", Common,
            "A trip with exactly three photos.";
        HighFive => "high_five", "🖐️", "High Five", "#5C6BC0", Common,
            "A trip with exactly five photos.";
        Minimalist => "minimalist", "🍃", "Minimalist", "#9E9D24", Common,
            "A trip with 5 to 10 photos.";
        LuckySeven => "lucky_seven", "🍀", "Lucky Seven", "#2E7D32", Uncommon,
            "A trip with exactly seven photos.";
        Dozen => "dozen", "🥚", "Dozen", "#F9A825", Uncommon,
            "A trip with exactly twelve photos.";
        Score => "score", "🎼", "Score", "#6A1B9A", Uncommon,
            "A trip with exactly twenty photos.";
        DirtyThirty => "dirty_thirty", "🎲", "Dirty Thirty", "#AD1457", Uncommon,
            "A trip with exactly thirty photos.";
        Fifty => "fifty", "🎖️", "Fifty", "#C62828", Rare,
            "A trip with exactly fifty photos.";
        Shutterbug => "shutterbug", "📷", "Shutterbug", "#039BE5", Common,
            "A trip with at least 25 photos.";
        Photographer => "photographer", "📸", "Photographer", "#0277BD", Uncommon,
            "A trip with at least 100 photos.";
        Paparazzi => "paparazzi", "🤳", "Paparazzi", "#01579B", Epic,
            "A trip with at least 500 photos.";
        ThousandClub => "thousand_club", "🏆", "Thousand Club", "#FFD600", Legendary,
            "A trip with at least 1000 photos.";
        MachineGun => "machine_gun", "💥", "Machine Gun", "#D84315", Rare,
            "More than 10 photos within 60 seconds.";
        BurstMode => "burst_mode", "📹", "Burst Mode", "#F57C00", Uncommon,
            "At least 5 photos within 10 seconds.";
        LongPause => "long_pause", "⏸️", "Long Pause", "#8D6E63", Common,
            "A gap of at least 6 hours between two photos.";
        CafeDweller => "cafe_dweller", "☕", "Cafe Dweller", "#6D4C41", Rare,
            "Stayed within 100 m for at least 3 hours.";
        OffTheGrid => "off_the_grid", "📵", "Off the Grid", "#424242", Uncommon,
            "No photo carries a location.";
        Cartographer => "cartographer", "🗺️", "Cartographer", "#00838F", Common,
            "Every photo carries a location.";
        LocationHopper => "location_hopper", "📍", "Location Hopper", "#D81B60", Rare,
            "Photos from at least 10 distinct spots.";
    }

    Geography {
        CircleBack => "circle_back", "🔄", "Circle Back", "#00ACC1", Uncommon,
            "Ended within 100 m of where you started.";
        StraightLine => "straight_line", "📏", "Straight Line", "#455A64", Rare,
            "Travelled at least 1 km in an almost straight line.";
        BorderCrosser => "border_crosser", "🛂", "Border Crosser", "#3F51B5", Epic,
            "Crossed into a different region of the world.";
        ContinentHopper => "continent_hopper", "🌐", "Continent Hopper", "#1A237E", Legendary,
            "Visited at least 3 regions of the world.";
        EquatorCrosser => "equator_crosser", "🧵", "Equator Crosser", "#F9A825", Epic,
            "Took photos on both sides of the equator.";
        MeridianCrosser => "meridian_crosser", "🕐", "Meridian Crosser", "#6A1B9A", Rare,
            "Crossed the prime meridian.";
        DateLineCrosser => "date_line_crosser", "📆", "Date Line Crosser", "#4A148C", Epic,
            "Crossed the international date line.";
        ArcticExplorer => "arctic_explorer", "🐻‍❄️", "Arctic Explorer", "#B3E5FC", Epic,
            "Took a photo north of the Arctic Circle.";
        AntarcticExplorer => "antarctic_explorer", "🐧", "Antarctic Explorer", "#E1F5FE", Legendary,
            "Took a photo south of the Antarctic Circle.";
        Tropical => "tropical", "🌴", "Tropical", "#43A047", Common,
            "Took a photo in the tropics.";
        SouthernHemisphere => "southern_hemisphere", "🦘", "Down Under", "#EF6C00", Uncommon,
            "Every located photo is south of the equator.";
        Staycation => "staycation", "🏡", "Staycation", "#8BC34A", Common,
            "Every located photo is within 1 km of the first.";
    }

    DayOfWeek {
        MondayBlues => "monday_blues", "😩", "Monday Blues", "#1565C0", Common,
            "Every photo was taken on a Monday.";
        TacoTuesday => "taco_tuesday", "🌮", "Taco Tuesday", "#FBC02D", Common,
            "Every photo was taken on a Tuesday.";
        HumpDay => "hump_day", "🐪", "Hump Day", "#A1887F", Common,
            "Every photo was taken on a Wednesday.";
        ThirstyThursday => "thirsty_thursday", "🍹", "Thirsty Thursday", "#26C6DA", Common,
            "Every photo was taken on a Thursday.";
        FridayFeeling => "friday_feeling", "🎉", "Friday Feeling", "#EC407A", Common,
            "Every photo was taken on a Friday.";
        SaturdaySpecial => "saturday_special", "🛍️", "Saturday Special", "#AB47BC", Common,
            "Every photo was taken on a Saturday.";
        SundayFunday => "sunday_funday", "🎈", "Sunday Funday", "#FF7043", Common,
            "Every photo was taken on a Sunday.";
        WeekendWarrior => "weekend_warrior", "⚔️", "Weekend Warrior", "#E91E63", Common,
            "Every photo was taken on a Saturday or Sunday.";
        WeekdayWanderer => "weekday_wanderer", "🚶", "Weekday Wanderer", "#607D8B", Common,
            "Every photo was taken Monday to Friday.";
        FullWeek => "full_week", "7️⃣", "Full Week", "#3949AB", Rare,
            "Took photos on all seven days of the week.";
    }

    Special {
        PrimeTime => "prime_time", "🔢", "Prime Time", "#00897B", Uncommon,
            "The number of photos is prime.";
        Fibonacci => "fibonacci", "🐚", "Fibonacci", "#F4511E", Rare,
            "The number of photos is a Fibonacci number.";
        Symmetric => "symmetric", "🪞", "Symmetric", "#8E24AA", Rare,
            "The number of photos reads the same backwards.";
        RoundNumber => "round_number", "⭕", "Round Number", "#039BE5", Uncommon,
            "Exactly 10, 50 or 100 photos.";
        FirstTimer => "first_timer", "🌱", "First Timer", "#66BB6A", Common,
            "Recorded your very first trip.";
        NewYears => "new_years", "🎆", "New Year's", "#FFD54F", Rare,
            "Took a photo on January 1st.";
        Valentine => "valentine", "💘", "Valentine", "#E91E63", Rare,
            "Took a photo on February 14th.";
        LeapDay => "leap_day", "🐸", "Leap Day", "#4CAF50", Legendary,
            "Took a photo on February 29th.";
        PiDay => "pi_day", "🥧", "Pi Day", "#795548", Rare,
            "Took a photo on March 14th.";
        Halloween => "halloween", "🎃", "Halloween", "#FF6F00", Rare,
            "Took a photo on October 31st.";
        Christmas => "christmas", "🎄", "Christmas", "#C62828", Rare,
            "Took a photo on December 25th.";
        FridayThirteenth => "friday_thirteenth", "🐈‍⬛", "Friday the 13th", "#212121", Epic,
            "Took a photo on a Friday the 13th.";
        Completionist => "completionist", "💯", "Completionist", "#FFC107", Epic,
            "Earned at least 10 achievements on one trip.";
    }
}

/// Tag -> type index, built once on first lookup.
static TAG_INDEX: Lazy<HashMap<&'static str, AchievementType>> = Lazy::new(|| {
    AchievementType::ALL
        .iter()
        .map(|&kind| (kind.as_str(), kind))
        .collect()
});

impl AchievementType {
    /// Catalog entry for this type.
    pub fn info(self) -> &'static AchievementInfo {
        &CATALOG[self as usize]
    }

    /// Rarity tier from the catalog.
    pub fn rarity(self) -> Rarity {
        self.info().rarity
    }

    /// Category from the catalog.
    pub fn category(self) -> Category {
        self.info().category
    }
}

/// The whole catalog, in evaluation order.
pub fn all() -> &'static [AchievementInfo] {
    CATALOG
}

/// Look up a catalog entry by tag.
///
/// Tags outside the catalog are a contract violation and are reported as
/// [`TripError::UnknownAchievement`].
pub fn lookup(tag: &str) -> Result<&'static AchievementInfo> {
    TAG_INDEX
        .get(tag)
        .map(|kind| kind.info())
        .ok_or_unknown_achievement(tag)
}

impl FromStr for AchievementType {
    type Err = TripError;

    fn from_str(tag: &str) -> Result<Self> {
        TAG_INDEX.get(tag).copied().ok_or_unknown_achievement(tag)
    }
}

impl fmt::Display for AchievementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AchievementType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AchievementType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        tag.parse().map_err(serde::de::Error::custom)
    }
}
