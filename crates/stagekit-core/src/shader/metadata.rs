use serde::Serialize;

pub const DESCRIPTION: &str = "Low Poly - Individual Polygon Alpha Control";
pub const CREDIT: &str = "Generated from SVG";
pub const ISF_VERSION: &str = "2";

/// ISF JSON header, serialized in field order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct IsfMetadata {
    pub description: String,
    pub credit: String,
    #[serde(rename = "ISFVSN")]
    pub isf_version: String,
    pub inputs: Vec<IsfInput>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct IsfInput {
    pub name: String,
    #[serde(rename = "TYPE")]
    pub kind: IsfInputKind,
    pub default: IsfValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IsfInputKind {
    Float,
    Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IsfValue {
    Float(f64),
    Color([f64; 4]),
}

impl IsfInput {
    /// Float slider in `0.0..=1.0` defaulting to fully opaque.
    pub fn unit_float(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: IsfInputKind::Float,
            default: IsfValue::Float(1.0),
            min: Some(0.0),
            max: Some(1.0),
            label: label.into(),
        }
    }

    pub fn color(name: impl Into<String>, label: impl Into<String>, rgba: [f64; 4]) -> Self {
        Self {
            name: name.into(),
            kind: IsfInputKind::Color,
            default: IsfValue::Color(rgba),
            min: None,
            max: None,
            label: label.into(),
        }
    }
}

/// Name of the alpha input driving polygon `index`.
pub fn polygon_alpha_name(index: usize) -> String {
    format!("poly{index}_alpha")
}

impl IsfMetadata {
    /// `globalAlpha`, one alpha per polygon, then the two colours.
    pub fn for_polygons(count: usize) -> Self {
        let mut inputs = Vec::with_capacity(count + 3);
        inputs.push(IsfInput::unit_float("globalAlpha", "Global Alpha"));
        inputs.extend((0..count).map(|i| {
            IsfInput::unit_float(polygon_alpha_name(i), format!("Polygon {} Alpha", i + 1))
        }));
        inputs.push(IsfInput::color(
            "polygonColor",
            "Polygon Color",
            [0.8, 0.8, 0.8, 1.0],
        ));
        inputs.push(IsfInput::color(
            "backgroundColor",
            "Background Color",
            [0.0, 0.0, 0.0, 0.0],
        ));
        Self {
            description: DESCRIPTION.to_string(),
            credit: CREDIT.to_string(),
            isf_version: ISF_VERSION.to_string(),
            inputs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::IsfMetadata;

    #[test]
    fn inputs_are_positional() {
        let meta = IsfMetadata::for_polygons(2);
        let names: Vec<_> = meta.inputs.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            [
                "globalAlpha",
                "poly0_alpha",
                "poly1_alpha",
                "polygonColor",
                "backgroundColor"
            ]
        );
        assert_eq!(meta.inputs[2].label, "Polygon 2 Alpha");
    }

    #[test]
    fn serializes_isf_keys() {
        let value = serde_json::to_value(IsfMetadata::for_polygons(1)).unwrap();
        assert_eq!(value["ISFVSN"], "2");
        let alpha = &value["INPUTS"][1];
        assert_eq!(alpha["NAME"], "poly0_alpha");
        assert_eq!(alpha["TYPE"], "float");
        assert_eq!(alpha["DEFAULT"], 1.0);
        assert_eq!(alpha["MAX"], 1.0);
        let color = &value["INPUTS"][2];
        assert_eq!(color["TYPE"], "color");
        assert!(color.get("MIN").is_none());
        assert_eq!(color["DEFAULT"][0], 0.8);
    }
}
