//! The predicate table.
//!
//! One named rule per achievement type, listed in catalog order. A rule
//! returns `Some(metadata)` when its badge fires; an empty map means no
//! diagnostics worth keeping. Rules never look at other trips: the only
//! outside input is the first-trip flag.

use std::collections::BTreeSet;

use chrono::{Datelike, Weekday};
use serde_json::{json, Value};

use super::catalog::AchievementType;
use super::facts::TripFacts;
use super::Metadata;
use crate::geo_utils::{distance_km, region_of};
use crate::numeric::{is_fibonacci, is_palindrome, is_prime};
use crate::route::round_to_tenth;

const HOUR_SECS: i64 = 3600;
const DAY_SECS: i64 = 24 * HOUR_SECS;

// Movement
const SPEED_DEMON_KMH: f64 = 100.0;
const TELEPORTER_KMH: f64 = 150.0;
const JET_SETTER_KMH: f64 = 500.0;
const SNAIL_PACE_KMH: f64 = 1.0;
const CRUISE_MIN_KMH: f64 = 40.0;
const CRUISE_MAX_KMH: f64 = 120.0;
const HALF_MARATHON_KM: f64 = 21.0975;
const MARATHON_KM: f64 = 42.0;
const HIGH_ALTITUDE_M: f64 = 2000.0;
const MOUNTAINEER_M: f64 = 4000.0;
const CLIMB_RANGE_M: f64 = 1000.0;

// Photo behaviour
const MACHINE_GUN_WINDOW_MS: i64 = 60_000;
const MACHINE_GUN_MIN_PHOTOS: usize = 11;
const BURST_WINDOW_MS: i64 = 10_000;
const BURST_MIN_PHOTOS: usize = 5;
const LONG_PAUSE_SECS: i64 = 6 * HOUR_SECS;
const CAFE_RADIUS_M: f64 = 100.0;
const CAFE_MIN_SECS: i64 = 3 * HOUR_SECS;
const LOCATION_GRID_DEGREES: f64 = 0.01;
const LOCATION_HOPPER_CELLS: usize = 10;

// Geography
const CIRCLE_BACK_KM: f64 = 0.1;
const STRAIGHT_LINE_MIN_KM: f64 = 1.0;
const STRAIGHT_LINE_RATIO: f64 = 0.95;
const ARCTIC_CIRCLE_LAT: f64 = 66.56;
const TROPIC_LAT: f64 = 23.44;
const STAYCATION_KM: f64 = 1.0;

const ROUND_NUMBERS: &[u64] = &[10, 50, 100];
const COMPLETIONIST_MIN: usize = 10;

/// What a rule sees.
pub struct RuleContext<'f, 'a> {
    pub facts: &'f TripFacts<'a>,
    pub is_first_trip: bool,
    /// Badges fired by earlier rules in this evaluation
    pub earned: usize,
}

/// A named predicate descriptor.
pub struct Rule {
    pub achievement_type: AchievementType,
    pub check: fn(&RuleContext<'_, '_>) -> Option<Metadata>,
}

macro_rules! rules {
    ($($variant:ident => $check:path),* $(,)?) => {
        pub const RULES: &[Rule] = &[
            $(Rule { achievement_type: AchievementType::$variant, check: $check },)*
        ];
    };
}

rules! {
    // Speed & movement
    SpeedDemon => speed_demon,
    Teleporter => teleporter,
    JetSetter => jet_setter,
    SnailPace => snail_pace,
    CruiseControl => cruise_control,
    Explorer => explorer,
    HalfMarathon => half_marathon,
    MarathonRunner => marathon_runner,
    RoadTripper => road_tripper,
    LongHauler => long_hauler,
    GlobeTrotter => globe_trotter,
    HighAltitude => high_altitude,
    Mountaineer => mountaineer,
    BelowSeaLevel => below_sea_level,
    Climber => climber,
    // Time of day
    DawnPatrol => dawn_patrol,
    EarlyBird => early_bird,
    LunchBreak => lunch_break,
    SunsetChaser => sunset_chaser,
    MidnightSnapper => midnight_snapper,
    NightOwl => night_owl,
    RoundTheClock => round_the_clock,
    NineToFive => nine_to_five,
    // Day span & duration
    DayTripper => day_tripper,
    Overnighter => overnighter,
    LongWeekend => long_weekend,
    WeekTraveler => week_traveler,
    Fortnight => fortnight,
    MonthAdventurer => month_adventurer,
    SeasonSpanner => season_spanner,
    DailyDiarist => daily_diarist,
    QuickSnap => quick_snap,
    HourJourney => hour_journey,
    HalfDay => half_day,
    FullDay => full_day,
    MultiDay => multi_day,
    // Photo count & behaviour
    OneShot => one_shot,
    Duo => duo,
    Trio => trio,
    HighFive => high_five,
    Minimalist => minimalist,
    LuckySeven => lucky_seven,
    Dozen => dozen,
    Score => score,
    DirtyThirty => dirty_thirty,
    Fifty => fifty,
    Shutterbug => shutterbug,
    Photographer => photographer,
    Paparazzi => paparazzi,
    ThousandClub => thousand_club,
    MachineGun => machine_gun,
    BurstMode => burst_mode,
    LongPause => long_pause,
    CafeDweller => cafe_dweller,
    OffTheGrid => off_the_grid,
    Cartographer => cartographer,
    LocationHopper => location_hopper,
    // Geography
    CircleBack => circle_back,
    StraightLine => straight_line,
    BorderCrosser => border_crosser,
    ContinentHopper => continent_hopper,
    EquatorCrosser => equator_crosser,
    MeridianCrosser => meridian_crosser,
    DateLineCrosser => date_line_crosser,
    ArcticExplorer => arctic_explorer,
    AntarcticExplorer => antarctic_explorer,
    Tropical => tropical,
    SouthernHemisphere => southern_hemisphere,
    Staycation => staycation,
    // Day of week
    MondayBlues => monday_blues,
    TacoTuesday => taco_tuesday,
    HumpDay => hump_day,
    ThirstyThursday => thirsty_thursday,
    FridayFeeling => friday_feeling,
    SaturdaySpecial => saturday_special,
    SundayFunday => sunday_funday,
    WeekendWarrior => weekend_warrior,
    WeekdayWanderer => weekday_wanderer,
    FullWeek => full_week,
    // Special & numeric
    PrimeTime => prime_time,
    Fibonacci => fibonacci,
    Symmetric => symmetric,
    RoundNumber => round_number,
    FirstTimer => first_timer,
    NewYears => new_years,
    Valentine => valentine,
    LeapDay => leap_day,
    PiDay => pi_day,
    Halloween => halloween,
    Christmas => christmas,
    FridayThirteenth => friday_thirteenth,
    Completionist => completionist,
}

// ============================================================================
// Helpers
// ============================================================================

fn fired_if(condition: bool) -> Option<Metadata> {
    condition.then(Metadata::new)
}

fn with<const N: usize>(entries: [(&str, Value); N]) -> Metadata {
    entries
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

// ============================================================================
// Speed & movement
// ============================================================================

fn speed_above(ctx: &RuleContext<'_, '_>, limit_kmh: f64) -> Option<Metadata> {
    let fastest = ctx.facts.fastest_segment()?;
    (fastest.speed_kmh > limit_kmh).then(|| {
        with([
            ("speedKmh", json!(round_to_tenth(fastest.speed_kmh))),
            ("fromPhotoId", json!(fastest.from_photo_id)),
            ("toPhotoId", json!(fastest.to_photo_id)),
        ])
    })
}

fn speed_demon(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    speed_above(ctx, SPEED_DEMON_KMH)
}

fn teleporter(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    speed_above(ctx, TELEPORTER_KMH)
}

fn jet_setter(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    speed_above(ctx, JET_SETTER_KMH)
}

fn snail_pace(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let avg = ctx.facts.average_speed_kmh()?;
    let slow = ctx.facts.distance_km > 0.0
        && ctx.facts.duration_secs >= HOUR_SECS
        && avg < SNAIL_PACE_KMH;
    slow.then(|| with([("averageSpeedKmh", json!(avg))]))
}

fn cruise_control(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let avg = ctx.facts.average_speed_kmh()?;
    let cruising = ctx.facts.duration_secs >= HOUR_SECS
        && (CRUISE_MIN_KMH..CRUISE_MAX_KMH).contains(&avg);
    cruising.then(|| with([("averageSpeedKmh", json!(round_to_tenth(avg)))]))
}

fn distance_at_least(ctx: &RuleContext<'_, '_>, km: f64) -> Option<Metadata> {
    distance_where(ctx, |d| d >= km)
}

fn distance_where(ctx: &RuleContext<'_, '_>, test: impl Fn(f64) -> bool) -> Option<Metadata> {
    let d = ctx.facts.distance_km;
    test(d).then(|| with([("distanceKm", json!(round_to_tenth(d)))]))
}

fn explorer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_at_least(ctx, 10.0)
}

fn half_marathon(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_where(ctx, |d| d > HALF_MARATHON_KM)
}

fn marathon_runner(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_where(ctx, |d| d > MARATHON_KM)
}

fn road_tripper(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_at_least(ctx, 100.0)
}

fn long_hauler(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_at_least(ctx, 500.0)
}

fn globe_trotter(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    distance_at_least(ctx, 1000.0)
}

fn high_altitude(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.altitudes().any(|a| a > HIGH_ALTITUDE_M))
}

fn mountaineer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.altitudes().any(|a| a > MOUNTAINEER_M))
}

fn below_sea_level(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.altitudes().any(|a| a < 0.0))
}

fn climber(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let lowest = ctx.facts.altitudes().reduce(f64::min)?;
    let highest = ctx.facts.altitudes().reduce(f64::max)?;
    let range = highest - lowest;
    (range >= CLIMB_RANGE_M).then(|| with([("altitudeRangeM", json!(range.round()))]))
}

// ============================================================================
// Time of day
// ============================================================================

fn any_hour(ctx: &RuleContext<'_, '_>, test: impl Fn(u32) -> bool) -> Option<Metadata> {
    fired_if(ctx.facts.hours.iter().any(|&h| test(h)))
}

fn dawn_patrol(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| h == 4)
}

fn early_bird(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| (5..7).contains(&h))
}

fn lunch_break(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| h == 12)
}

fn sunset_chaser(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| (18..20).contains(&h))
}

fn midnight_snapper(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| h == 0)
}

fn night_owl(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    any_hour(ctx, |h| (2..4).contains(&h))
}

fn round_the_clock(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let distinct = ctx.facts.hours.iter().collect::<BTreeSet<_>>().len();
    (distinct >= 12).then(|| with([("distinctHours", json!(distinct))]))
}

fn nine_to_five(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let hours = &ctx.facts.hours;
    fired_if(!hours.is_empty() && hours.iter().all(|h| (9..17).contains(h)))
}

// ============================================================================
// Day span & duration buckets
// ============================================================================

fn span_where(ctx: &RuleContext<'_, '_>, test: impl Fn(i64) -> bool) -> Option<Metadata> {
    let span = ctx.facts.span_days();
    test(span).then(|| with([("spanDays", json!(span))]))
}

fn day_tripper(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    if ctx.facts.count() < 2 {
        return None;
    }
    span_where(ctx, |d| d == 1)
}

fn overnighter(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d == 2)
}

// Calendar days: a 26 hour Friday night to Sunday morning trip spans 3.
fn long_weekend(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d >= 3)
}

fn week_traveler(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d >= 7)
}

fn fortnight(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d >= 14)
}

fn month_adventurer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d >= 30)
}

fn season_spanner(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    span_where(ctx, |d| d >= 90)
}

fn daily_diarist(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let span = ctx.facts.span_days();
    fired_if(span >= 3 && ctx.facts.distinct_dates() as i64 == span)
}

// Buckets are disjoint; a zero duration earns none of them.
fn duration_in(ctx: &RuleContext<'_, '_>, min_secs: i64, max_secs: i64) -> Option<Metadata> {
    let d = ctx.facts.duration_secs;
    (d > 0 && d >= min_secs && d < max_secs).then(|| with([("durationSecs", json!(d))]))
}

fn quick_snap(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    duration_in(ctx, 0, HOUR_SECS)
}

fn hour_journey(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    duration_in(ctx, HOUR_SECS, 6 * HOUR_SECS)
}

fn half_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    duration_in(ctx, 6 * HOUR_SECS, 12 * HOUR_SECS)
}

fn full_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    duration_in(ctx, 12 * HOUR_SECS, DAY_SECS)
}

fn multi_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    duration_in(ctx, DAY_SECS, i64::MAX)
}

// ============================================================================
// Photo count & behaviour
// ============================================================================

fn count_is(ctx: &RuleContext<'_, '_>, n: u64) -> Option<Metadata> {
    fired_if(ctx.facts.count() == n)
}

fn count_at_least(ctx: &RuleContext<'_, '_>, n: u64) -> Option<Metadata> {
    let count = ctx.facts.count();
    (count >= n).then(|| with([("photoCount", json!(count))]))
}

fn one_shot(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 1)
}

fn duo(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 2)
}

fn trio(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 3)
}

fn high_five(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 5)
}

fn minimalist(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if((5..=10).contains(&ctx.facts.count()))
}

fn lucky_seven(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 7)
}

fn dozen(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 12)
}

fn score(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 20)
}

fn dirty_thirty(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 30)
}

fn fifty(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_is(ctx, 50)
}

fn shutterbug(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_at_least(ctx, 25)
}

fn photographer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_at_least(ctx, 100)
}

fn paparazzi(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_at_least(ctx, 500)
}

fn thousand_club(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    count_at_least(ctx, 1000)
}

fn machine_gun(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let densest = ctx.facts.densest_window(MACHINE_GUN_WINDOW_MS);
    (densest >= MACHINE_GUN_MIN_PHOTOS).then(|| with([("photosPerMinute", json!(densest))]))
}

fn burst_mode(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.densest_window(BURST_WINDOW_MS) >= BURST_MIN_PHOTOS)
}

fn long_pause(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let gap = ctx.facts.longest_gap_secs();
    (gap >= LONG_PAUSE_SECS).then(|| with([("gapSecs", json!(gap))]))
}

fn cafe_dweller(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let dwell = ctx.facts.longest_dwell_secs(CAFE_RADIUS_M);
    (dwell >= CAFE_MIN_SECS).then(|| with([("dwellSecs", json!(dwell))]))
}

fn off_the_grid(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.count() > 0 && ctx.facts.located.is_empty())
}

fn cartographer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.count() > 0 && ctx.facts.located.len() == ctx.facts.photos.len())
}

fn location_hopper(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let cells: BTreeSet<(i64, i64)> = ctx
        .facts
        .located
        .iter()
        .map(|l| {
            (
                (l.point.latitude / LOCATION_GRID_DEGREES).floor() as i64,
                (l.point.longitude / LOCATION_GRID_DEGREES).floor() as i64,
            )
        })
        .collect();
    (cells.len() >= LOCATION_HOPPER_CELLS).then(|| with([("distinctSpots", json!(cells.len()))]))
}

// ============================================================================
// Geography
// ============================================================================

fn circle_back(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let located = &ctx.facts.located;
    if located.len() < 2 {
        return None;
    }
    let (first, last) = (located.first()?, located.last()?);
    let gap_km = distance_km(&first.point, &last.point);
    (gap_km <= CIRCLE_BACK_KM).then(|| with([("endGapM", json!((gap_km * 1000.0).round()))]))
}

fn straight_line(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let located = &ctx.facts.located;
    if located.len() < 3 {
        return None;
    }
    let chord = distance_km(&located.first()?.point, &located.last()?.point);
    let path = ctx.facts.distance_km;
    if chord < STRAIGHT_LINE_MIN_KM || path <= 0.0 {
        return None;
    }
    let ratio = chord / path;
    (ratio >= STRAIGHT_LINE_RATIO).then(|| with([("straightness", json!(ratio))]))
}

fn border_crosser(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    ctx.facts.located.windows(2).find_map(|pair| {
        let from = region_of(&pair[0].point)?;
        let to = region_of(&pair[1].point)?;
        (from != to).then(|| with([("from", json!(from)), ("to", json!(to))]))
    })
}

fn continent_hopper(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let regions: BTreeSet<_> = ctx
        .facts
        .located
        .iter()
        .filter_map(|l| region_of(&l.point))
        .collect();
    (regions.len() >= 3).then(|| with([("regions", json!(regions))]))
}

fn equator_crosser(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let located = &ctx.facts.located;
    fired_if(
        located.iter().any(|l| l.point.latitude > 0.0)
            && located.iter().any(|l| l.point.latitude < 0.0),
    )
}

fn meridian_crosser(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.located.windows(2).any(|pair| {
        let (a, b) = (pair[0].point.longitude, pair[1].point.longitude);
        (a < 0.0) != (b < 0.0) && (b - a).abs() < 180.0
    }))
}

fn date_line_crosser(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.located.windows(2).any(|pair| {
        (pair[1].point.longitude - pair[0].point.longitude).abs() > 180.0
    }))
}

fn arctic_explorer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.located.iter().any(|l| l.point.latitude > ARCTIC_CIRCLE_LAT))
}

fn antarctic_explorer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.located.iter().any(|l| l.point.latitude < -ARCTIC_CIRCLE_LAT))
}

fn tropical(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.facts.located.iter().any(|l| l.point.latitude.abs() < TROPIC_LAT))
}

fn southern_hemisphere(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let located = &ctx.facts.located;
    fired_if(!located.is_empty() && located.iter().all(|l| l.point.latitude < 0.0))
}

fn staycation(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let located = &ctx.facts.located;
    if located.len() < 2 {
        return None;
    }
    let home = located.first()?.point;
    fired_if(located.iter().all(|l| distance_km(&home, &l.point) <= STAYCATION_KM))
}

// ============================================================================
// Day of week
// ============================================================================

fn every_weekday(ctx: &RuleContext<'_, '_>, test: impl Fn(Weekday) -> bool) -> Option<Metadata> {
    let mut weekdays = ctx.facts.weekdays().peekable();
    if weekdays.peek().is_none() {
        return None;
    }
    fired_if(weekdays.all(test))
}

fn monday_blues(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Mon)
}

fn taco_tuesday(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Tue)
}

fn hump_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Wed)
}

fn thirsty_thursday(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Thu)
}

fn friday_feeling(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Fri)
}

fn saturday_special(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Sat)
}

fn sunday_funday(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| d == Weekday::Sun)
}

fn weekend_warrior(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| matches!(d, Weekday::Sat | Weekday::Sun))
}

fn weekday_wanderer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    every_weekday(ctx, |d| !matches!(d, Weekday::Sat | Weekday::Sun))
}

fn full_week(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let distinct: BTreeSet<u32> = ctx
        .facts
        .weekdays()
        .map(|d| d.num_days_from_monday())
        .collect();
    fired_if(distinct.len() == 7)
}

// ============================================================================
// Special & numeric
// ============================================================================

fn prime_time(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(is_prime(ctx.facts.count()))
}

fn fibonacci(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(is_fibonacci(ctx.facts.count()))
}

fn symmetric(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(is_palindrome(ctx.facts.count()))
}

fn round_number(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ROUND_NUMBERS.contains(&ctx.facts.count()))
}

fn first_timer(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(ctx.is_first_trip)
}

fn on_date(ctx: &RuleContext<'_, '_>, month: u32, day: u32) -> Option<Metadata> {
    fired_if(
        ctx.facts
            .dates
            .iter()
            .any(|d| d.month() == month && d.day() == day),
    )
}

fn new_years(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 1, 1)
}

fn valentine(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 2, 14)
}

fn leap_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 2, 29)
}

fn pi_day(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 3, 14)
}

fn halloween(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 10, 31)
}

fn christmas(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    on_date(ctx, 12, 25)
}

fn friday_thirteenth(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    fired_if(
        ctx.facts
            .dates
            .iter()
            .any(|d| d.day() == 13 && d.weekday() == Weekday::Fri),
    )
}

/// Runs last, so `earned` covers every other badge.
fn completionist(ctx: &RuleContext<'_, '_>) -> Option<Metadata> {
    let total = ctx.earned + 1;
    (total >= COMPLETIONIST_MIN).then(|| with([("totalAchievements", json!(total))]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_table_follows_catalog_order() {
        let rule_types: Vec<_> = RULES.iter().map(|r| r.achievement_type).collect();
        assert_eq!(rule_types, AchievementType::ALL.to_vec());
    }

    #[test]
    fn test_with_builds_metadata() {
        let metadata = with([("speedKmh", json!(600.4)), ("toPhotoId", json!("b"))]);
        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata["speedKmh"], json!(600.4));
    }

    #[test]
    fn test_fired_if() {
        assert_eq!(fired_if(true), Some(Metadata::new()));
        assert_eq!(fired_if(false), None);
    }
}
