//! Catalogs of glasses and cross-catalog queries.
//!
//! Catalogs are filled by a reader and treated as read-only afterwards.
//! Replacing a [`CatalogSet`] drops every [`Glass`] it owned; borrowed
//! references cannot outlive it.

use log::debug;
use serde::Serialize;

use crate::dispersion::DispersionFormula;
use crate::error::{GlassError, Result};
use crate::glass::{DerivedQuantity, Glass};

/// All glasses from one supplier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    supplier: String,
    glasses: Vec<Glass>,
}

impl Catalog {
    pub fn new(supplier: impl Into<String>) -> Self {
        Self {
            supplier: supplier.into(),
            glasses: Vec::new(),
        }
    }

    pub fn supplier(&self) -> &str {
        &self.supplier
    }

    pub fn push(&mut self, glass: Glass) {
        self.glasses.push(glass);
    }

    pub fn glass_count(&self) -> usize {
        self.glasses.len()
    }

    pub fn glass(&self, index: usize) -> Option<&Glass> {
        self.glasses.get(index)
    }

    pub fn glasses(&self) -> &[Glass] {
        &self.glasses
    }

    /// Find a glass by product name.
    pub fn find(&self, product_name: &str) -> Option<&Glass> {
        self.glasses
            .iter()
            .find(|glass| glass.product_name() == product_name)
    }

    /// One glass-map series: `(x, y)` per glass, labelled by full name.
    ///
    /// Glasses without a known dispersion formula are left out.
    pub fn glass_map(&self, x: DerivedQuantity, y: DerivedQuantity) -> GlassMapSeries {
        let mut points = Vec::with_capacity(self.glasses.len());
        for glass in &self.glasses {
            if glass.formula() == DispersionFormula::Unknown {
                debug!("Skipping {} on glass map: unknown formula", glass.full_name());
                continue;
            }
            points.push(GlassMapPoint {
                label: glass.full_name(),
                x: glass.derived(x),
                y: glass.derived(y),
            });
        }
        GlassMapSeries {
            supplier: self.supplier.clone(),
            points,
        }
    }
}

/// A labelled point on a glass map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlassMapPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// Glass-map points for one catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlassMapSeries {
    pub supplier: String,
    pub points: Vec<GlassMapPoint>,
}

/// Every loaded catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSet {
    catalogs: Vec<Catalog>,
}

impl CatalogSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, catalog: Catalog) {
        self.catalogs.push(catalog);
    }

    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn catalog(&self, supplier: &str) -> Option<&Catalog> {
        self.catalogs
            .iter()
            .find(|catalog| catalog.supplier() == supplier)
    }

    /// All glasses across catalogs, in load order.
    pub fn glasses(&self) -> impl Iterator<Item = &Glass> {
        self.catalogs.iter().flat_map(|catalog| catalog.glasses().iter())
    }

    /// Find a glass by full name (`"<name>_<supplier>"`).
    ///
    /// The split happens at the last underscore, so product names may
    /// themselves contain underscores.
    pub fn find(&self, full_name: &str) -> Result<&Glass> {
        let not_found = || GlassError::GlassNotFound(full_name.to_string());
        let (product, supplier) = full_name.rsplit_once('_').ok_or_else(not_found)?;
        self.catalog(supplier)
            .and_then(|catalog| catalog.find(product))
            .ok_or_else(not_found)
    }

    /// One glass-map series per catalog.
    pub fn glass_map(&self, x: DerivedQuantity, y: DerivedQuantity) -> Vec<GlassMapSeries> {
        self.catalogs
            .iter()
            .map(|catalog| catalog.glass_map(x, y))
            .collect()
    }

    /// Glasses near `full_name` on the `(x, y)` glass map.
    ///
    /// A glass is a neighbour when both `|Δx| < x_threshold` and
    /// `|Δy| < y_threshold`. The target itself is included. Glasses without
    /// a known dispersion formula are not on the map and never match.
    pub fn neighbors(
        &self,
        full_name: &str,
        x: DerivedQuantity,
        y: DerivedQuantity,
        x_threshold: f64,
        y_threshold: f64,
    ) -> Result<Vec<&Glass>> {
        let target = self.find(full_name)?;
        let (tx, ty) = (target.derived(x), target.derived(y));
        let neighbors: Vec<&Glass> = self
            .glasses()
            .filter(|glass| glass.formula() != DispersionFormula::Unknown)
            .filter(|glass| {
                (glass.derived(x) - tx).abs() < x_threshold
                    && (glass.derived(y) - ty).abs() < y_threshold
            })
            .collect();
        debug!("{} neighbours of {}", neighbors.len(), full_name);
        Ok(neighbors)
    }
}
