// ABOUTME: Static medical condition catalog with contraindicated ingredient substrings
// ABOUTME: Exhaustive ConditionKey -> HealthCondition lookup checked at compile time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! # Condition Catalog
//!
//! Each condition carries a display label, the ingredient substrings considered
//! contraindicated, and ordered advisory texts. The first advisory is the primary
//! text appended to danger warnings. Ingredient substrings are written in the
//! same script as the recipe catalog.

use crate::models::ConditionKey;
use serde::Serialize;

/// Catalog entry for one medical condition
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthCondition {
    /// Display name
    pub label: &'static str,
    /// Ingredient substrings considered contraindicated
    pub bad_ingredients: &'static [&'static str],
    /// Ordered advisory texts; the first is the primary warning
    pub warnings: &'static [&'static str],
}

impl HealthCondition {
    /// Primary advisory text, empty if the entry carries none
    #[must_use]
    pub fn primary_warning(&self) -> &'static str {
        self.warnings.first().copied().unwrap_or_default()
    }
}

const DIABETES: HealthCondition = HealthCondition {
    label: "السكري",
    bad_ingredients: &[
        "سكر", "عسل", "تمر", "زبيب", "مشمش مجفف", "برقوق", "قرفة سكر", "شباكية", "حلوى",
    ],
    warnings: &["تجنب الوصفات العالية بالسكر", "راقب كمية الكربوهيدرات"],
};

const HYPERTENSION: HealthCondition = HealthCondition {
    label: "ضغط الدم المرتفع",
    bad_ingredients: &["ملح", "زيتون مملح", "حامض مصير", "مخلل", "صويا"],
    warnings: &["قلل من الملح", "تجنب الأطعمة المملحة"],
};

const CHOLESTEROL: HealthCondition = HealthCondition {
    label: "الكولسترول",
    bad_ingredients: &["زبدة", "سمن", "لحم دهني", "جلد الدجاج", "كريمة", "جبن"],
    warnings: &["تجنب الدهون المشبعة", "اختر اللحوم الخالية من الدهون"],
};

const HEART_DISEASE: HealthCondition = HealthCondition {
    label: "أمراض القلب",
    bad_ingredients: &["ملح", "زبدة", "سمن", "لحم أحمر", "مقلي", "زيت كثير"],
    warnings: &["قلل من الدهون المشبعة والملح", "اختر الأسماك والخضروات"],
};

const KIDNEY: HealthCondition = HealthCondition {
    label: "أمراض الكلى",
    bad_ingredients: &["ملح", "بروتين كثير", "لحم أحمر", "طماطم", "بطاطس", "موز", "برتقال"],
    warnings: &["قلل من البروتين والبوتاسيوم", "راقب كمية السوائل"],
};

const GOUT: HealthCondition = HealthCondition {
    label: "النقرس",
    bad_ingredients: &["لحم أحمر", "كبد", "سردين", "عدس", "فول", "حمص", "فاصوليا"],
    warnings: &["تجنب اللحوم الحمراء والبقوليات", "أكثر من شرب الماء"],
};

const CELIAC: HealthCondition = HealthCondition {
    label: "حساسية الغلوتين",
    bad_ingredients: &[
        "دقيق",
        "خبز",
        "كسكس",
        "شعرية",
        "معجنات",
        "بسطيلة",
        "ورقة بسطيلة",
        "بغرير",
        "مسمن",
        "حرشة",
        "فريك",
    ],
    warnings: &["تجنب جميع منتجات القمح", "استبدل بالأرز أو دقيق الذرة"],
};

const LACTOSE: HealthCondition = HealthCondition {
    label: "حساسية اللاكتوز",
    bad_ingredients: &["حليب", "لبن", "جبن", "زبدة", "كريمة", "ياغورت"],
    warnings: &["تجنب منتجات الألبان", "استبدل بحليب نباتي"],
};

const OBESITY: HealthCondition = HealthCondition {
    label: "السمنة",
    bad_ingredients: &["سكر", "زبدة", "سمن", "مقلي", "عسل", "لوز محمص"],
    warnings: &["اختر وصفات أقل من 400 سعرة", "تجنب المقليات والحلويات"],
};

const ANEMIA: HealthCondition = HealthCondition {
    label: "فقر الدم",
    bad_ingredients: &[],
    warnings: &["تناول الأطعمة الغنية بالحديد", "اللحوم الحمراء والسبانخ مفيدة لك"],
};

impl ConditionKey {
    /// Catalog entry for this condition
    #[must_use]
    pub const fn condition(self) -> &'static HealthCondition {
        match self {
            Self::Diabetes => &DIABETES,
            Self::Hypertension => &HYPERTENSION,
            Self::Cholesterol => &CHOLESTEROL,
            Self::HeartDisease => &HEART_DISEASE,
            Self::Kidney => &KIDNEY,
            Self::Gout => &GOUT,
            Self::Celiac => &CELIAC,
            Self::Lactose => &LACTOSE,
            Self::Obesity => &OBESITY,
            Self::Anemia => &ANEMIA,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_condition_has_label_and_primary_warning() {
        for key in ConditionKey::ALL {
            let condition = key.condition();
            assert!(!condition.label.is_empty(), "{key:?} has no label");
            assert!(!condition.primary_warning().is_empty(), "{key:?} has no warning");
        }
    }

    #[test]
    fn test_anemia_has_no_contraindications() {
        assert!(ConditionKey::Anemia.condition().bad_ingredients.is_empty());
    }

    #[test]
    fn test_diabetes_flags_sugar() {
        assert!(ConditionKey::Diabetes
            .condition()
            .bad_ingredients
            .contains(&"سكر"));
    }
}
