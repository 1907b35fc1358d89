//! Workout routine catalog
//!
//! A fixed table of routine templates keyed by routine type and the number
//! of training days per week. Lookups never fail: a combination that is not
//! in the table comes back as an absent plan.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::validation::VALID_ROUTINE_CATEGORIES;

/// Help text explaining compound versus isolation exercises.
pub const EXERCISE_TYPES_EXPLAINER: &str = "Compound exercises work several muscles at the \
same time, like the squat, which uses legs, glutes and core. They are more efficient because \
you gain strength in several parts of the body at once. Isolation exercises focus on a single \
muscle, like the biceps curl, which only works the arm. They are good for defining or \
improving specific areas.";

/// Routine type offered on the routine form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineCategory {
    Hypertrophy,
    Strength,
    Fitness,
    WeightLoss,
}

impl RoutineCategory {
    pub const ALL: [RoutineCategory; 4] = [
        RoutineCategory::Hypertrophy,
        RoutineCategory::Strength,
        RoutineCategory::Fitness,
        RoutineCategory::WeightLoss,
    ];

    /// Identifier used in requests
    pub fn key(&self) -> &'static str {
        match self {
            RoutineCategory::Hypertrophy => "hypertrophy",
            RoutineCategory::Strength => "strength",
            RoutineCategory::Fitness => "fitness",
            RoutineCategory::WeightLoss => "weight_loss",
        }
    }

    /// Get a human-readable name
    pub fn label(&self) -> &'static str {
        match self {
            RoutineCategory::Hypertrophy => "Hypertrophy",
            RoutineCategory::Strength => "Strength",
            RoutineCategory::Fitness => "Stay in shape",
            RoutineCategory::WeightLoss => "Weight loss",
        }
    }

    fn entry(&self) -> &'static CategoryEntry {
        match self {
            RoutineCategory::Hypertrophy => &HYPERTROPHY,
            RoutineCategory::Strength => &STRENGTH,
            RoutineCategory::Fitness => &FITNESS,
            RoutineCategory::WeightLoss => &WEIGHT_LOSS,
        }
    }

    /// What the routine type is about; independent of the day count
    pub fn description(&self) -> &'static CategoryDescription {
        &self.entry().description
    }

    /// The template for a supported day count
    pub fn plan(&self, days: TrainingDays) -> &'static RoutinePlan {
        &self.entry().plans[days.index()]
    }
}

impl fmt::Display for RoutineCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RoutineCategory {
    type Err = String;

    /// Case-insensitive; `weight-loss` and `weight loss` are accepted too
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        RoutineCategory::ALL
            .into_iter()
            .find(|category| category.key() == normalized)
            .ok_or_else(|| {
                format!(
                    "Invalid routine type. Must be one of: {}",
                    VALID_ROUTINE_CATEGORIES.join(", ")
                )
            })
    }
}

/// Supported training frequencies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrainingDays {
    Three,
    Four,
    Five,
}

impl TrainingDays {
    pub const ALL: [TrainingDays; 3] = [TrainingDays::Three, TrainingDays::Four, TrainingDays::Five];

    /// Map a days-per-week count onto the table, if it is covered
    ///
    /// Any other integer, negative ones included, is simply not in the table.
    pub fn from_count(days: i64) -> Option<Self> {
        match days {
            3 => Some(TrainingDays::Three),
            4 => Some(TrainingDays::Four),
            5 => Some(TrainingDays::Five),
            _ => None,
        }
    }

    pub fn count(&self) -> u32 {
        match self {
            TrainingDays::Three => 3,
            TrainingDays::Four => 4,
            TrainingDays::Five => 5,
        }
    }

    fn index(&self) -> usize {
        match self {
            TrainingDays::Three => 0,
            TrainingDays::Four => 1,
            TrainingDays::Five => 2,
        }
    }
}

/// Category-level explanation shown above any plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescription {
    pub what_is: &'static str,
    pub how_it_works: &'static str,
    pub sets_reps_guidance: &'static str,
}

/// One weekly template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutinePlan {
    pub name: &'static str,
    pub training_days: u32,
    pub exercise_count_range: &'static str,
    pub distribution: &'static str,
    pub weekly_split_pattern: &'static str,
}

struct CategoryEntry {
    description: CategoryDescription,
    /// Indexed by [`TrainingDays::index`]
    plans: [RoutinePlan; 3],
}

/// Result of a routine query
///
/// A known category always carries its description, even when the day
/// count has no plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoutineLookup {
    pub plan: Option<RoutinePlan>,
    pub description: Option<CategoryDescription>,
}

impl RoutineLookup {
    pub const NOT_FOUND: RoutineLookup = RoutineLookup {
        plan: None,
        description: None,
    };

    pub fn is_found(&self) -> bool {
        self.plan.is_some()
    }
}

/// Look up the plan and description for a category and day count
pub fn find_routine(category: RoutineCategory, days: i64) -> RoutineLookup {
    RoutineLookup {
        plan: TrainingDays::from_count(days).map(|days| *category.plan(days)),
        description: Some(*category.description()),
    }
}

/// Same as [`find_routine`], starting from the category name sent by a form
///
/// An unrecognised name is an unknown category: nothing is found.
pub fn lookup_routine(category: &str, days: i64) -> RoutineLookup {
    match category.parse::<RoutineCategory>() {
        Ok(category) => find_routine(category, days),
        Err(_) => RoutineLookup::NOT_FOUND,
    }
}

// ============================================================================
// Catalog
// ============================================================================

const FULL_BODY: &str = "Full body";
const UPPER_LOWER: &str = "2 upper-body days and 2 lower-body days";

static HYPERTROPHY: CategoryEntry = CategoryEntry {
    description: CategoryDescription {
        what_is: "A hypertrophy routine is designed to help you increase the size of your \
muscles. If your goal is to look stronger and more defined, with more muscle volume, this is \
the kind of training you need.",
        how_it_works: "Muscle grows when you put it through an intense effort that forces it \
to adapt. That effort creates small tears in the muscle fibres which, once they recover, \
become bigger and stronger.",
        sets_reps_guidance: "3 to 4 sets of 8 to 12 reps",
    },
    plans: [
        RoutinePlan {
            name: "Hypertrophy 3 days/week",
            training_days: 3,
            exercise_count_range: "5 to 7 exercises",
            distribution: "2 to 3 compound and 3 to 4 isolation",
            weekly_split_pattern: FULL_BODY,
        },
        RoutinePlan {
            name: "Hypertrophy 4 days/week",
            training_days: 4,
            exercise_count_range: "6 to 8 exercises",
            distribution: "2 compound and 4 to 6 isolation",
            weekly_split_pattern: UPPER_LOWER,
        },
        RoutinePlan {
            name: "Hypertrophy 5 days/week",
            training_days: 5,
            exercise_count_range: "7 to 9 exercises",
            distribution: "2 compound and 5 to 7 isolation",
            weekly_split_pattern: "Chest + back, shoulders + arms, legs + abs, etc.",
        },
    ],
};

static STRENGTH: CategoryEntry = CategoryEntry {
    description: CategoryDescription {
        what_is: "A strength routine focuses on improving your muscles' ability to lift heavy \
loads. If your goal is to raise your maximal strength and muscular endurance, this is the \
ideal training.",
        how_it_works: "Strength training puts your muscles under significant tension through \
weightlifting, which triggers neurological and physiological adaptations that improve your \
ability to generate force.",
        sets_reps_guidance: "4 to 6 sets of 3 to 6 reps",
    },
    plans: [
        RoutinePlan {
            name: "Strength 3 days/week",
            training_days: 3,
            exercise_count_range: "4 to 5 exercises",
            distribution: "3 compound and 1 to 2 accessory",
            weekly_split_pattern: FULL_BODY,
        },
        RoutinePlan {
            name: "Strength 4 days/week",
            training_days: 4,
            exercise_count_range: "5 to 6 exercises",
            distribution: "2 compound and 3 to 4 accessory",
            weekly_split_pattern: UPPER_LOWER,
        },
        RoutinePlan {
            name: "Strength 5 days/week",
            training_days: 5,
            exercise_count_range: "5 to 7 exercises",
            distribution: "2 compound and 4 to 5 accessory",
            weekly_split_pattern: "Chest + back, shoulders + arms, etc.",
        },
    ],
};

static FITNESS: CategoryEntry = CategoryEntry {
    description: CategoryDescription {
        what_is: "A stay-in-shape routine is designed to keep good overall physical health \
and a toned body. Ideal for people who are not after drastic changes but want to stay \
active.",
        how_it_works: "The routine balances strength and cardiovascular work, which helps \
preserve muscle mass while improving endurance and general health.",
        sets_reps_guidance: "2 to 4 sets of 12 to 20 reps",
    },
    plans: [
        RoutinePlan {
            name: "Stay in shape 3 days/week",
            training_days: 3,
            exercise_count_range: "5 to 7 exercises",
            distribution: "3 to 4 compound and 2 to 3 isolation",
            weekly_split_pattern: FULL_BODY,
        },
        RoutinePlan {
            name: "Stay in shape 4 days/week",
            training_days: 4,
            exercise_count_range: "6 to 8 exercises",
            distribution: "2 to 3 compound and 4 to 5 isolation",
            weekly_split_pattern: UPPER_LOWER,
        },
        RoutinePlan {
            name: "Stay in shape 5 days/week",
            training_days: 5,
            exercise_count_range: "6 to 9 exercises",
            distribution: "2 compound and 4 to 6 isolation",
            weekly_split_pattern: "Chest + back, shoulders + arms, etc.",
        },
    ],
};

static WEIGHT_LOSS: CategoryEntry = CategoryEntry {
    description: CategoryDescription {
        what_is: "A weight-loss routine focuses on burning calories and reducing body fat. It \
combines resistance exercises with an emphasis on cardio to maximise calorie burn.",
        how_it_works: "Raising your heart rate during the exercises and pairing it with \
strength training makes your body more efficient at burning fat while it keeps its muscle \
mass.",
        sets_reps_guidance: "4 to 5 sets of 8 to 15 reps",
    },
    plans: [
        RoutinePlan {
            name: "Weight loss 3 days/week",
            training_days: 3,
            exercise_count_range: "6 to 8 exercises",
            distribution: "3 to 4 compound, 2 to 3 isolation and 1 to 2 high-intensity",
            weekly_split_pattern: FULL_BODY,
        },
        RoutinePlan {
            name: "Weight loss 4 days/week",
            training_days: 4,
            exercise_count_range: "7 to 9 exercises",
            distribution: "2 to 3 compound, 3 to 4 isolation and 2 high-intensity",
            weekly_split_pattern: UPPER_LOWER,
        },
        RoutinePlan {
            name: "Weight loss 5 days/week",
            training_days: 5,
            exercise_count_range: "6 to 10 exercises",
            distribution: "2 compound, 4 to 5 isolation and 2 to 3 high-intensity",
            weekly_split_pattern: "Chest, shoulders and triceps; back and biceps; etc.",
        },
    ],
};
