// ABOUTME: Arabic advisory texts and icons used when building health warnings
// ABOUTME: Formatting helpers keep the interpolated values in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Display texts for health warnings. Changing these changes what users read.

/// Warning icons
pub mod icons {
    /// High calorie recipe
    pub const HIGH_CALORIE: &str = "⚠️";
    /// Calories within the meal target
    pub const CALORIES_OK: &str = "✅";
    /// Child advice
    pub const CHILD: &str = "👶";
    /// Teen advice
    pub const TEEN: &str = "🧑";
    /// Senior advice
    pub const SENIOR: &str = "👴";
    /// Contraindicated ingredient
    pub const CONDITION_DANGER: &str = "🚫";
    /// Recipe clear for a condition
    pub const CONDITION_CLEAR: &str = "💚";
    /// Weight-loss goal advice
    pub const LOSE_GOAL: &str = "🏋️";
    /// Weight-gain goal advice
    pub const GAIN_GOAL: &str = "💪";
}

/// Title of the high calorie warning
pub const HIGH_CALORIE_TITLE: &str = "سعرات عالية";
/// Title of the within-target entry
pub const CALORIES_OK_TITLE: &str = "سعرات مناسبة";

/// Child advice title
pub const CHILD_TITLE: &str = "نصيحة للأطفال";
/// Child advice
pub const CHILD_MESSAGE: &str =
    "قلل حجم الحصة للنصف. تجنب التوابل الحارة والفلفل. أضف المزيد من الخضروات.";
/// Teen advice title
pub const TEEN_TITLE: &str = "نصيحة للمراهقين";
/// Teen advice
pub const TEEN_MESSAGE: &str =
    "جسمك في مرحلة نمو ويحتاج بروتين وكالسيوم إضافي. أضف الحليب أو اللبن كمشروب جانبي.";
/// Senior advice title
pub const SENIOR_TITLE: &str = "نصيحة لكبار السن";
/// Senior advice
pub const SENIOR_MESSAGE: &str =
    "اطبخ الطعام لفترة أطول ليصبح أسهل في الهضم. قلل الملح والدهون. أضف المزيد من الخضروات المسلوقة.";

/// Shown when a recipe has none of a condition's contraindicated ingredients
pub const CONDITION_CLEAR_MESSAGE: &str = "هذه الوصفة لا تحتوي على مكونات ضارة لحالتك الصحية";

/// Weight-loss advice title
pub const LOSE_GOAL_TITLE: &str = "هدف إنقاص الوزن";
/// Weight-loss advice
pub const LOSE_GOAL_MESSAGE: &str =
    "لإنقاص الوزن، حاول اختيار وصفات أقل من 400 سعرة. يمكنك تقليل الحصة أو إزالة الزيت/الزبدة.";
/// Weight-gain advice title
pub const GAIN_GOAL_TITLE: &str = "هدف زيادة الوزن";
/// Weight-gain advice
pub const GAIN_GOAL_MESSAGE: &str =
    "لزيادة الوزن، أضف المزيد من البروتين والكربوهيدرات. يمكنك إضافة أرز أو خبز كطبق جانبي.";

const ARABIC_LIST_SEPARATOR: &str = "، ";

/// Body of the high calorie warning
#[must_use]
pub fn high_calorie_message(recipe_calories: u32, meal_calories: i64, age: u32) -> String {
    format!(
        "هذه الوصفة تحتوي على {recipe_calories} سعرة وهي أكثر من {meal_calories} سعرة الموصى بها لوجبة واحدة لشخص بعمر {age} سنة"
    )
}

/// Body of the within-target entry
#[must_use]
pub fn calories_ok_message(daily_calories: i64, meal_calories: i64) -> String {
    format!(
        "هذه الوصفة مناسبة لاحتياجاتك اليومية ({daily_calories} سعرة/يوم، ~{meal_calories} لكل وجبة)"
    )
}

/// Title of a condition danger warning
#[must_use]
pub fn condition_danger_title(label: &str) -> String {
    format!("تحذير - {label}")
}

/// Names the offending ingredients followed by the condition's primary advisory
#[must_use]
pub fn condition_danger_message(found: &[&str], primary_warning: &str) -> String {
    format!(
        "تحتوي على مكونات غير مناسبة: {}. {primary_warning}",
        found.join(ARABIC_LIST_SEPARATOR)
    )
}

/// Title of a condition clear entry
#[must_use]
pub fn condition_clear_title(label: &str) -> String {
    format!("مناسبة - {label}")
}
