use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use url::Url;

/// One component of a recipe. Quantity is free text ("2 cups", "3 cloves").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientItem {
    pub name: String,
    pub quantity: String,
}

/// Wire values are exact lowercase strings; any other casing fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Snack,
    Beverage,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Dessert => "dessert",
            Self::Snack => "snack",
            Self::Beverage => "beverage",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "breakfast" => Some(Self::Breakfast),
            "lunch" => Some(Self::Lunch),
            "dinner" => Some(Self::Dinner),
            "dessert" => Some(Self::Dessert),
            "snack" => Some(Self::Snack),
            "beverage" => Some(Self::Beverage),
            _ => None,
        }
    }
}

/// A stored recipe as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<IngredientItem>,
    pub instructions: Vec<String>,
    pub prep_time: i64,
    pub cook_time: i64,
    pub servings: i64,
    pub difficulty: Difficulty,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<Url>,
    pub rating: i64,
    pub created_at: NaiveDate,
    pub updated_at: NaiveDate,
}

/// Id-less payload accepted by POST and PUT. Unknown fields (including a
/// client-sent `id`) are ignored; the path id always wins on update. Dates are
/// optional and defaulted to today by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<IngredientItem>,
    pub instructions: Vec<String>,
    pub prep_time: i64,
    pub cook_time: i64,
    pub servings: i64,
    pub difficulty: Difficulty,
    pub category: Category,
    #[serde(default)]
    pub image_url: Option<Url>,
    pub rating: i64,
    #[serde(default)]
    pub created_at: Option<NaiveDate>,
    #[serde(default)]
    pub updated_at: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn difficulty_is_case_sensitive() {
        assert_eq!(
            serde_json::from_value::<Difficulty>(json!("easy")).unwrap(),
            Difficulty::Easy
        );
        assert!(serde_json::from_value::<Difficulty>(json!("Easy")).is_err());
        assert!(serde_json::from_value::<Difficulty>(json!("impossible")).is_err());
    }

    #[test]
    fn category_round_trips_as_lowercase() {
        for cat in [
            Category::Breakfast,
            Category::Lunch,
            Category::Dinner,
            Category::Dessert,
            Category::Snack,
            Category::Beverage,
        ] {
            let s = serde_json::to_value(cat).unwrap();
            assert_eq!(s, json!(cat.as_str()));
            assert_eq!(serde_json::from_value::<Category>(s).unwrap(), cat);
            assert_eq!(Category::parse(cat.as_str()), Some(cat));
        }
    }

    #[test]
    fn create_payload_rejects_malformed_image_url() {
        let payload = json!({
            "title": "Tea",
            "description": "Hot tea",
            "ingredients": [{"name": "Water", "quantity": "1 cup"}],
            "instructions": ["Boil water", "Steep"],
            "prep_time": 1,
            "cook_time": 3,
            "servings": 1,
            "difficulty": "easy",
            "category": "beverage",
            "image_url": "not a url",
            "rating": 5
        });
        assert!(serde_json::from_value::<RecipeCreate>(payload).is_err());
    }

    #[test]
    fn create_payload_ignores_client_sent_id() {
        let payload = json!({
            "id": 999,
            "title": "Tea",
            "description": "Hot tea",
            "ingredients": [],
            "instructions": [],
            "prep_time": 1,
            "cook_time": 3,
            "servings": 1,
            "difficulty": "easy",
            "category": "beverage",
            "rating": 5
        });
        let draft: RecipeCreate = serde_json::from_value(payload).unwrap();
        assert_eq!(draft.title, "Tea");
        assert!(draft.created_at.is_none());
    }
}
