use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// A product recommended by the assistant.
///
/// Products are plain values decoded from a reply. Fields the service sends
/// but this type doesn't know about are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier, unique within one reply.
    pub id: u64,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Raw category string, see [`Product::category_kind`].
    pub category: String,
    /// Price in the catalog currency. Never negative.
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    /// Where to buy the product.
    pub amazon_url: String,
    /// Picture of the product.
    #[serde(default)]
    pub image_url: String,
    /// Skin types the product is meant for.
    #[serde(default)]
    pub skin_types: Vec<String>,
    /// Short benefit tags, most relevant first.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Returns the recognized category of this product, if any.
    #[inline]
    pub fn category_kind(&self) -> Option<Category> {
        Category::parse(&self.category)
    }
}

fn non_negative_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = f64::deserialize(deserializer)?;
    if !price.is_finite() || price < 0.0 {
        return Err(D::Error::custom(format!("invalid price: {price}")));
    }
    Ok(price)
}

/// The known product categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Face cleanser.
    Cleanser,
    /// Serum.
    Serum,
    /// Face cream.
    Cream,
    /// Sun protection.
    Spf,
    /// Face mask.
    Mask,
    /// Toner.
    Toner,
    /// Eye contour treatment.
    EyeContour,
    /// Exfoliant.
    Exfoliant,
    /// Face oil.
    Oil,
    /// Lip care.
    Lip,
}

impl Category {
    /// All categories, in catalog order.
    pub const ALL: [Category; 10] = [
        Category::Cleanser,
        Category::Serum,
        Category::Cream,
        Category::Spf,
        Category::Mask,
        Category::Toner,
        Category::EyeContour,
        Category::Exfoliant,
        Category::Oil,
        Category::Lip,
    ];

    /// Parses a category name.
    ///
    /// Both the English names and the Italian names used by the product
    /// catalog are accepted. Unknown names yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        let category = match s.to_ascii_lowercase().as_str() {
            "cleanser" | "detergente" => Category::Cleanser,
            "serum" | "siero" => Category::Serum,
            "cream" | "crema" => Category::Cream,
            "spf" => Category::Spf,
            "mask" | "maschera" => Category::Mask,
            "toner" | "tonico" => Category::Toner,
            "eye_contour" | "contorno_occhi" => Category::EyeContour,
            "exfoliant" | "esfoliante" => Category::Exfoliant,
            "oil" | "olio" => Category::Oil,
            "lip" | "labbra" => Category::Lip,
            _ => return None,
        };
        Some(category)
    }

    /// Returns the canonical name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cleanser => "cleanser",
            Category::Serum => "serum",
            Category::Cream => "cream",
            Category::Spf => "spf",
            Category::Mask => "mask",
            Category::Toner => "toner",
            Category::EyeContour => "eye_contour",
            Category::Exfoliant => "exfoliant",
            Category::Oil => "oil",
            Category::Lip => "lip",
        }
    }
}
