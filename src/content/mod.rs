//! Learning content for the home screen: daily tips, skill drills and
//! history moments, plus the lookups that pick one to feature.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;

/// Short coaching tip, one featured per day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DailyTip {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SkillDrill {
    pub id: &'static str,
    pub name: &'static str,
    pub focus: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryMoment {
    pub year: i32,
    pub title: &'static str,
    pub blurb: &'static str,
}

pub static DAILY_TIPS: [DailyTip; 4] = [
    DailyTip {
        title: "Track the Count",
        description: "Work on recognizing the count quickly. Knowing whether the pitcher is ahead or behind helps you anticipate the next pitch.",
    },
    DailyTip {
        title: "Ready Position Basics",
        description: "Set your feet shoulder-width apart with your glove relaxed and eyes on the ball. This athletic stance keeps you quick on defense.",
    },
    DailyTip {
        title: "Smart Base Running",
        description: "Watch the third-base coach and read the ball off the bat. Anticipating hits lets you take extra bases safely.",
    },
    DailyTip {
        title: "Communicate Loudly",
        description: "Call for fly balls early using short phrases like “Mine!” to avoid collisions and boost team confidence.",
    },
];

pub static SKILL_DRILLS: [SkillDrill; 4] = [
    SkillDrill {
        id: "soft-toss",
        name: "Soft Toss Warmup",
        focus: "Batting Rhythm",
        duration: "10 min",
        description: "Work with a partner to toss balls from the side. Focus on smooth swings and driving the ball back up the middle.",
    },
    SkillDrill {
        id: "ladder-feet",
        name: "Agility Ladder",
        focus: "Footwork",
        duration: "8 min",
        description: "Use an agility ladder or tape boxes on the ground. Quick feet translate to faster jumps on line drives.",
    },
    SkillDrill {
        id: "bullpen",
        name: "Bullpen Routine",
        focus: "Pitch Command",
        duration: "12 min",
        description: "Alternate fastballs and changeups to all four quadrants of the plate. Chart results to learn which spots need work.",
    },
    SkillDrill {
        id: "relay-throws",
        name: "Relay Throws",
        focus: "Outfield Arm Strength",
        duration: "15 min",
        description: "Set up a cutoff partner halfway to the infield and practice quick transfers. Aim for chest-high throws every time.",
    },
];

pub static HISTORY_MOMENTS: [HistoryMoment; 3] = [
    HistoryMoment {
        year: 1846,
        title: "First Recorded Game",
        blurb: "Alexander Cartwright's Knickerbocker Club faced the New York Nine in Hoboken, setting the template for the modern game.",
    },
    HistoryMoment {
        year: 1947,
        title: "Barriers Broken",
        blurb: "Jackie Robinson debuted for the Brooklyn Dodgers, integrating Major League Baseball and inspiring generations of players.",
    },
    HistoryMoment {
        year: 2004,
        title: "The Comeback",
        blurb: "The Boston Red Sox rallied from an 0-3 deficit in the ALCS, the first team to do so, on their way to a historic title.",
    },
];

/// The tip featured on `date`: day of the year (January 1st = 1) modulo the tip count.
///
/// ```
/// use chrono::NaiveDate;
/// use dugout::content::tip_of_day;
///
/// let jan_1 = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(tip_of_day(jan_1).title, "Ready Position Basics");
/// ```
pub fn tip_of_day(date: NaiveDate) -> &'static DailyTip {
    let index = date.ordinal() as usize % DAILY_TIPS.len();
    &DAILY_TIPS[index]
}

/// The tip featured today in local time.
pub fn tip_for_today() -> &'static DailyTip {
    tip_of_day(Local::now().date_naive())
}

/// History moment at `index`, wrapping in both directions.
pub fn history_highlight(index: i64) -> Option<&'static HistoryMoment> {
    select_wrapping(&HISTORY_MOMENTS, index)
}

fn select_wrapping<T>(items: &[T], index: i64) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let len = items.len() as i64;
    items.get(index.rem_euclid(len) as usize)
}

pub fn drill_by_id(id: &str) -> Option<&'static SkillDrill> {
    SKILL_DRILLS.iter().find(|d| d.id == id)
}
