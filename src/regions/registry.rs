use crate::{
    core::{
        bounds::Bounds,
        constants::REGION_STROKE_WIDTH,
        geo::Point,
        style::{Color, Theme},
    },
    prelude::HashMap,
    regions::{source::GeometryMap, RegionCatalog, RegionId},
    MapError, Result,
};
use kurbo::{BezPath, Shape};

/// One drawable shape of a region together with its current style
#[derive(Debug, Clone)]
pub struct RegionPath {
    geometry: BezPath,
    bounds: Bounds,
    fill: Color,
    stroke: Color,
    stroke_width: f64,
}

impl RegionPath {
    /// Parses SVG path data
    pub fn parse(region: &RegionId, data: &str) -> Result<Self> {
        let geometry = BezPath::from_svg(data).map_err(|e| MapError::InvalidPath {
            region: region.clone(),
            reason: e.to_string(),
        })?;
        if geometry.elements().is_empty() {
            return Err(MapError::InvalidPath {
                region: region.clone(),
                reason: "empty path".to_string(),
            });
        }
        let bounds = geometry.bounding_box().into();

        Ok(Self {
            geometry,
            bounds,
            fill: Color::TRANSPARENT,
            stroke: Color::TRANSPARENT,
            stroke_width: REGION_STROKE_WIDTH,
        })
    }

    pub fn geometry(&self) -> &BezPath {
        &self.geometry
    }

    /// Layout bounds in canvas coordinates
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn fill(&self) -> Color {
        self.fill
    }

    pub fn stroke(&self) -> Color {
        self.stroke
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.bounds.contains(point) && self.geometry.contains((*point).into())
    }

    fn set_style(&mut self, fill: Color, stroke: Color) {
        self.fill = fill;
        self.stroke = stroke;
    }
}

/// A named region: every path is styled and hit as one unit
#[derive(Debug, Clone)]
pub struct Region {
    id: RegionId,
    paths: Vec<RegionPath>,
    override_color: Option<Color>,
    override_stroke: Option<Color>,
}

impl Region {
    pub fn id(&self) -> &RegionId {
        &self.id
    }

    pub fn paths(&self) -> &[RegionPath] {
        &self.paths
    }

    pub fn override_color(&self) -> Option<Color> {
        self.override_color
    }

    pub fn override_stroke(&self) -> Option<Color> {
        self.override_stroke
    }

    /// Fill of the region when it is neither hovered nor selected
    pub fn resting_fill(&self, theme: &Theme) -> Color {
        self.override_color.unwrap_or(theme.fill_color)
    }

    pub fn resting_stroke(&self, theme: &Theme) -> Color {
        self.override_stroke.unwrap_or(theme.stroke_color)
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.paths.iter().any(|path| path.contains(point))
    }
}

/// Region id to parsed geometry. Built once; afterwards only the path
/// styles change.
#[derive(Debug, Clone, Default)]
pub struct RegionRegistry {
    regions: HashMap<RegionId, Region>,
    // sorted ids, so repaints and hit tests are deterministic
    order: Vec<RegionId>,
}

impl RegionRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses every path of `geometry` and applies the catalog overrides and
    /// the theme's resting colors. Paths that fail to parse are skipped.
    pub fn from_geometry(geometry: GeometryMap, catalog: &RegionCatalog, theme: &Theme) -> Self {
        let mut regions = HashMap::default();

        for (id, path_data) in geometry {
            if !catalog.is_empty() && !catalog.contains(id.as_str()) {
                log::warn!("Region {} is not part of the region catalog", id);
            }

            let paths: Vec<RegionPath> = path_data
                .iter()
                .filter_map(|data| match RegionPath::parse(&id, data) {
                    Ok(path) => Some(path),
                    Err(e) => {
                        log::warn!("Skipping path: {}", e);
                        None
                    }
                })
                .collect();

            let mut region = Region {
                override_color: catalog.override_color(id.as_str()),
                override_stroke: catalog.override_stroke(id.as_str()),
                id: id.clone(),
                paths,
            };
            let (fill, stroke) = (region.resting_fill(theme), region.resting_stroke(theme));
            region
                .paths
                .iter_mut()
                .for_each(|path| path.set_style(fill, stroke));

            regions.insert(id, region);
        }

        let mut order: Vec<RegionId> = regions.keys().cloned().collect();
        order.sort();
        log::debug!("Region registry built with {} regions", order.len());

        Self { regions, order }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    /// Region ids in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &RegionId> {
        self.order.iter()
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.order.iter().filter_map(|id| self.regions.get(id))
    }

    pub fn region(&self, id: &str) -> Result<&Region> {
        self.regions
            .get(id)
            .ok_or_else(|| MapError::UnknownRegion(RegionId::new(id)))
    }

    pub fn override_color(&self, id: &str) -> Option<Color> {
        self.regions.get(id).and_then(Region::override_color)
    }

    /// Ordered geometries of a region
    pub fn paths_of(&self, id: &str) -> Result<&[RegionPath]> {
        self.region(id).map(Region::paths)
    }

    /// Encloses every path of every listed region.
    ///
    /// Starts from [`Bounds::canvas_sentinel`], so an empty list yields a
    /// degenerate rectangle.
    pub fn bounds_of<I>(&self, ids: I) -> Result<Bounds>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut bounds = Bounds::canvas_sentinel();
        for id in ids {
            for path in self.paths_of(id.as_ref())? {
                bounds.extend_bounds(&path.bounds());
            }
        }
        Ok(bounds)
    }

    /// Restyles every path of the region at once
    pub fn paint_region(&mut self, id: &str, fill: Color, stroke: Color) -> Result<()> {
        let region = self
            .regions
            .get_mut(id)
            .ok_or_else(|| MapError::UnknownRegion(RegionId::new(id)))?;
        region
            .paths
            .iter_mut()
            .for_each(|path| path.set_style(fill, stroke));
        Ok(())
    }

    /// Topmost region containing a canvas point
    pub fn region_at(&self, point: &Point) -> Option<&RegionId> {
        self.order
            .iter()
            .rev()
            .find(|id| self.regions.get(*id).is_some_and(|r| r.contains(point)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::{RegionInfo, StaticGeometrySource};
    use crate::regions::{GeometrySource, Resolution};

    fn registry(catalog: &RegionCatalog) -> RegionRegistry {
        let geometry = StaticGeometrySource::from_pairs([
            ("A", "M 0 0 L 10 0 L 10 10 L 0 10 Z"),
            ("B", "M 20 5 L 30 5 L 30 15 Z;M 22 6 L 25 6 L 25 9 Z"),
            ("C", "M 100 100 C 110 80 120 80 130 100 Z;not a path"),
        ])
        .load(Resolution::HiRes)
        .unwrap();
        RegionRegistry::from_geometry(geometry, catalog, &Theme::default())
    }

    #[test]
    fn test_bounds_aggregation() {
        let registry = registry(&RegionCatalog::new());
        let bounds = registry.bounds_of(["A", "B"]).unwrap();
        assert_eq!(bounds, Bounds::from_coords(0.0, 0.0, 30.0, 15.0));
    }

    #[test]
    fn test_curve_bounds_are_exact() {
        let registry = registry(&RegionCatalog::new());
        let bounds = registry.bounds_of(["C"]).unwrap();
        assert!((bounds.min.y - 85.0).abs() < 1e-6);
        assert_eq!(bounds.max.x, 130.0);
    }

    #[test]
    fn test_empty_list_is_degenerate() {
        let registry = registry(&RegionCatalog::new());
        let bounds = registry.bounds_of(Vec::<RegionId>::new()).unwrap();
        assert!(bounds.is_degenerate());
    }

    #[test]
    fn test_unknown_region() {
        let mut registry = registry(&RegionCatalog::new());
        assert!(matches!(
            registry.paths_of("ZZ"),
            Err(MapError::UnknownRegion(_))
        ));
        assert!(registry.bounds_of(["A", "ZZ"]).is_err());
        assert!(registry.paint_region("ZZ", Color::RED, Color::BLACK).is_err());
    }

    #[test]
    fn test_invalid_path_is_skipped() {
        let registry = registry(&RegionCatalog::new());
        assert_eq!(registry.paths_of("C").unwrap().len(), 1);
        assert_eq!(registry.paths_of("B").unwrap().len(), 2);
    }

    #[test]
    fn test_overrides_and_resting_style() {
        let catalog = RegionCatalog::new().with_region("A", RegionInfo::with_color(Color::RED));
        let registry = registry(&catalog);
        let theme = Theme::default();

        assert!(registry
            .paths_of("A")
            .unwrap()
            .iter()
            .all(|p| p.fill() == Color::RED && p.stroke() == theme.stroke_color));
        assert!(registry
            .paths_of("B")
            .unwrap()
            .iter()
            .all(|p| p.fill() == theme.fill_color));
    }

    #[test]
    fn test_paint_region_is_atomic() {
        let mut registry = registry(&RegionCatalog::new());
        registry.paint_region("B", Color::WHITE, Color::RED).unwrap();
        assert!(registry
            .paths_of("B")
            .unwrap()
            .iter()
            .all(|p| p.fill() == Color::WHITE && p.stroke() == Color::RED));
    }

    #[test]
    fn test_hit_testing() {
        let registry = registry(&RegionCatalog::new());
        assert_eq!(
            registry.region_at(&Point::new(5.0, 5.0)).map(RegionId::as_str),
            Some("A")
        );
        assert_eq!(
            registry.region_at(&Point::new(29.0, 7.0)).map(RegionId::as_str),
            Some("B")
        );
        assert!(registry.region_at(&Point::new(50.0, 50.0)).is_none());
        assert_eq!(
            registry.ids().map(RegionId::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
    }
}
