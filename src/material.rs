use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use uom::si::{
    area::square_millimeter,
    f64::{Area, Length},
    length::millimeter,
};

#[cfg(test)]
use proptest::{
    arbitrary::Arbitrary,
    strategy::{BoxedStrategy, Strategy},
};

/// Sample geometry and reference data of a dielectric material.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub name: String,
    /// Electrode (cross-sectional) area of the sample
    pub area: Area,
    pub thickness: Length,
    /// Known Curie temperature in °C, `None` for non-ferroelectric materials
    pub curie_temperature_c: Option<f64>,
}

impl Material {
    pub fn new(
        name: &str,
        area_mm2: f64,
        thickness_mm: f64,
        curie_temperature_c: Option<f64>,
    ) -> Self {
        Material {
            name: name.into(),
            area: Area::new::<square_millimeter>(area_mm2),
            thickness: Length::new::<millimeter>(thickness_mm),
            curie_temperature_c,
        }
    }

    /// Reference Curie temperature, only for ferroelectric materials.
    /// Non-positive reference values count as "no Curie temperature".
    pub fn ferroelectric_curie_c(&self) -> Option<f64> {
        self.curie_temperature_c.filter(|t| *t > 0.0)
    }

    /// Side length of a square sample with the same area.
    pub fn side(&self) -> Length {
        Length::new::<millimeter>(self.area.get::<square_millimeter>().sqrt())
    }
}

#[cfg(test)]
impl Arbitrary for Material {
    type Parameters = ();
    type Strategy = BoxedStrategy<Material>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            "[A-Z][a-z]{0,8}( [A-Z][a-z]{0,8})?",
            1e-2f64..1e4f64,
            1e-3f64..100f64,
            proptest::option::of(1f64..1000f64),
        )
            .prop_map(|tuple| Material::new(&tuple.0, tuple.1, tuple.2, tuple.3))
            .boxed()
    }
}

/// Immutable name -> material lookup, iterated in alphabetical order.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialTable {
    materials: BTreeMap<String, Material>,
}

impl MaterialTable {
    /// Materials available when no configuration file is given.
    pub fn builtin() -> Self {
        let materials = [
            Material::new("Barium Titanate", 8.0 * 6.0, 1.42, Some(120.0)),
            Material::new("Titanium Dioxide", 8.0 * 6.0, 1.42, Some(50.0)),
            Material::new("Quartz", 8.0 * 6.0, 1.42, None),
        ];
        MaterialTable {
            materials: materials
                .into_iter()
                .map(|material| (material.name.clone(), material))
                .collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let string = fs::read_to_string(path)?;
        Self::from_json(&string)
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let loaded: as_loaded::MaterialTable = json5::from_str(json)?;
        let converted = loaded.try_into()?;
        Ok(converted)
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Material at a 1-based menu position.
    pub fn by_number(&self, number: usize) -> Option<&Material> {
        number
            .checked_sub(1)
            .and_then(|index| self.materials.values().nth(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

impl TryFrom<as_loaded::MaterialTable> for MaterialTable {
    type Error = anyhow::Error;
    fn try_from(value: as_loaded::MaterialTable) -> Result<Self, Self::Error> {
        if value.materials.is_empty() {
            anyhow::bail!("Material table is empty");
        }
        let materials = value
            .materials
            .into_iter()
            .map(|(name, material)| Ok((name.clone(), material.convert(name)?)))
            .collect::<anyhow::Result<BTreeMap<_, _>>>()?;
        Ok(MaterialTable { materials })
    }
}

mod as_loaded {
    use std::collections::BTreeMap;

    use serde::Deserialize;

    #[derive(Clone, Debug, Deserialize)]
    pub struct MaterialTable {
        pub materials: BTreeMap<String, Material>,
    }

    #[derive(Clone, Debug, Deserialize, PartialEq)]
    pub struct Material {
        pub area_mm2: f64,
        pub thickness_mm: f64,
        #[serde(default)]
        pub curie_temperature_c: Option<f64>,
    }

    impl Material {
        pub fn convert(self, name: String) -> anyhow::Result<super::Material> {
            if !(self.area_mm2.is_finite() && self.area_mm2 > 0.0) {
                anyhow::bail!("Material {:?} must have a positive area", name)
            }
            if !(self.thickness_mm.is_finite() && self.thickness_mm > 0.0) {
                anyhow::bail!("Material {:?} must have a positive thickness", name)
            }
            Ok(super::Material::new(
                &name,
                self.area_mm2,
                self.thickness_mm,
                self.curie_temperature_c,
            ))
        }
    }
}
