#[cfg(test)]
mod tests {
    use asset_length::entities::{AssetGeometry, GeometryKind, Length, LengthUnit, WorkArea};
    use asset_length::geometry::geodesic_length;
    use asset_length::length::{aggregator, clipper, decomposer, dispatcher, fallback};
    use asset_length::util::ClipConfig;
    use asset_length::{AssetLengthCalculator, compute_asset_length};
    use float_cmp::approx_eq;
    use geo::{LineString, MultiLineString, MultiPolygon, Point, Polygon};
    use test_case::test_case;

    fn line(coords: &[(f64, f64)]) -> LineString {
        LineString::from(coords.to_vec())
    }

    fn rect(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Polygon {
        Polygon::new(
            line(&[
                (x_min, y_min),
                (x_min, y_max),
                (x_max, y_max),
                (x_max, y_min),
                (x_min, y_min),
            ]),
            vec![],
        )
    }

    fn polygon_asset(polygon: Polygon) -> AssetGeometry {
        AssetGeometry::Polygon {
            polygon,
            road_sections: None,
        }
    }

    fn unit_square() -> WorkArea {
        WorkArea::Polygon(rect(0.0, 0.0, 1.0, 1.0))
    }

    fn crossing_line() -> LineString {
        line(&[(-1.0, 0.5), (2.0, 0.5)])
    }

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn assert_close(actual: f64, expected: f64) {
        let epsilon = 1e-6 * expected.abs().max(1.0);
        assert!(
            approx_eq!(f64, actual, expected, epsilon = epsilon),
            "{actual} != {expected}"
        );
    }

    #[test]
    fn horizontal_line_through_square_measures_only_inside() {
        let asset = AssetGeometry::LineString(crossing_line());
        let length = compute_asset_length(&asset, &unit_square());

        let inside = geodesic_length(&line(&[(0.0, 0.5), (1.0, 0.5)]));
        assert_eq!(length.unit, LengthUnit::Meter);
        assert_close(length.value, inside);
        assert!(length.value < geodesic_length(&crossing_line()));
    }

    #[test]
    fn fully_contained_line_measures_full_length() {
        let l = line(&[(0.2, 0.2), (0.8, 0.7), (0.3, 0.9)]);
        let work_area = unit_square();
        let parts = decomposer::parts(&work_area);

        let clipped = clipper::clip(&l, &parts, &ClipConfig::default());
        assert_close(clipped, geodesic_length(&l));
    }

    #[test]
    fn disjoint_line_falls_back_to_full_length() {
        init_logger();
        let l = line(&[(0.0, 0.0), (0.0, 0.001)]);
        let work_area = WorkArea::Polygon(rect(9.5, 9.5, 10.5, 10.5));
        let parts = decomposer::parts(&work_area);
        let config = ClipConfig::default();

        assert_eq!(clipper::clip(&l, &parts, &config), 0.0);

        let with_fallback = fallback::with_fallback(&l, &parts, &config);
        assert_close(with_fallback, geodesic_length(&l));
        assert!(with_fallback > 111.0 && with_fallback < 111.4);

        let asset = AssetGeometry::LineString(l);
        let length = compute_asset_length(&asset, &work_area);
        assert_close(length.value, with_fallback);
    }

    #[test]
    fn line_crossing_one_boundary_measures_inside_segment() {
        let l = line(&[(0.5, 0.5), (2.0, 0.5)]);
        let length = aggregator::of_single_line(&l, &unit_square(), &ClipConfig::default());

        let inside = line(&[(0.5, 0.5), (1.0, 0.5)]);
        assert_close(length.value, geodesic_length(&inside));
        assert!(length.value < geodesic_length(&l));
    }

    #[test]
    fn multi_line_is_sum_of_single_lines() {
        let config = ClipConfig::default();
        let work_area = unit_square();
        let l1 = crossing_line();
        let l2 = line(&[(0.1, 0.1), (0.4, 0.9)]);

        let combined = aggregator::of_lines([&l1, &l2], &work_area, &config);
        let separate = aggregator::of_single_line(&l1, &work_area, &config).value
            + aggregator::of_single_line(&l2, &work_area, &config).value;
        assert_close(combined.value, separate);

        let asset = AssetGeometry::MultiLineString(MultiLineString::new(vec![l1, l2]));
        assert_close(compute_asset_length(&asset, &work_area).value, separate);
    }

    #[test]
    fn polygon_without_road_sections_measures_outer_ring() {
        let config = ClipConfig::default();
        let work_area = unit_square();
        let polygon = rect(0.5, 0.5, 1.5, 1.5);

        let ring_length = aggregator::of_single_line(polygon.exterior(), &work_area, &config);
        let asset = AssetGeometry::Polygon {
            polygon,
            road_sections: None,
        };
        let asset_length = dispatcher::length(&asset, &work_area, &config);
        assert_close(asset_length.value, ring_length.value);

        let inside = geodesic_length(&line(&[(0.5, 0.5), (0.5, 1.0)]))
            + geodesic_length(&line(&[(1.0, 0.5), (0.5, 0.5)]));
        assert_close(asset_length.value, inside);
    }

    #[test]
    fn contributions_of_disjoint_parts_accumulate() {
        let work_area = WorkArea::MultiPolygon(MultiPolygon::new(vec![
            rect(0.0, 0.0, 1.0, 1.0),
            rect(2.0, 0.0, 3.0, 1.0),
        ]));
        let asset = AssetGeometry::LineString(line(&[(-1.0, 0.5), (4.0, 0.5)]));

        let expected = geodesic_length(&line(&[(0.0, 0.5), (1.0, 0.5)]))
            + geodesic_length(&line(&[(2.0, 0.5), (3.0, 0.5)]));
        assert_close(compute_asset_length(&asset, &work_area).value, expected);
    }

    #[test_case(false; "contained part last")]
    #[test_case(true; "contained part first")]
    fn fully_contained_contribution_accumulates(contained_first: bool) {
        //overlapping parts: the line lies fully inside the first, partially inside the second
        let containing = rect(0.0, 0.0, 1.0, 1.0);
        let partial = rect(0.5, 0.0, 2.0, 1.0);
        let parts = match contained_first {
            true => vec![&containing, &partial],
            false => vec![&partial, &containing],
        };
        let l = line(&[(0.2, 0.5), (0.8, 0.5)]);

        let clipped = clipper::clip(&l, &parts, &ClipConfig::default());
        let expected = geodesic_length(&l) + geodesic_length(&line(&[(0.5, 0.5), (0.8, 0.5)]));
        assert_close(clipped, expected);
    }

    #[test]
    fn line_through_hole_skips_hole() {
        let hole = line(&[
            (0.25, 0.25),
            (0.25, 0.75),
            (0.75, 0.75),
            (0.75, 0.25),
            (0.25, 0.25),
        ]);
        let outer = rect(0.0, 0.0, 1.0, 1.0).exterior().clone();
        let work_area = WorkArea::Polygon(Polygon::new(outer, vec![hole]));
        let asset = AssetGeometry::LineString(crossing_line());

        let expected = geodesic_length(&line(&[(0.0, 0.5), (0.25, 0.5)]))
            + geodesic_length(&line(&[(0.75, 0.5), (1.0, 0.5)]));
        assert_close(compute_asset_length(&asset, &work_area).value, expected);
    }

    #[test]
    fn line_on_boundary_falls_back() {
        init_logger();
        let l = line(&[(0.0, 0.0), (1.0, 0.0)]);
        let work_area = unit_square();
        let parts = decomposer::parts(&work_area);
        let config = ClipConfig::default();

        assert_eq!(clipper::clip(&l, &parts, &config), 0.0);
        assert_close(
            fallback::with_fallback(&l, &parts, &config),
            geodesic_length(&l),
        );
    }

    #[test]
    fn road_sections_are_clipped_without_fallback() {
        let config = ClipConfig::default();
        let work_area = unit_square();
        let outside = line(&[(5.0, 5.0), (5.0, 6.0)]);
        let on_boundary = line(&[(0.0, 0.0), (1.0, 0.0)]);

        let sections = [outside.clone(), on_boundary];
        let disjoint = aggregator::of_road_sections(&sections, &work_area, &config);
        assert_eq!(disjoint, Length::zero());

        let asset = AssetGeometry::Polygon {
            polygon: rect(-0.5, -0.5, 0.5, 0.5),
            road_sections: Some(vec![outside, crossing_line()]),
        };
        let expected = geodesic_length(&line(&[(0.0, 0.5), (1.0, 0.5)]));
        assert_close(compute_asset_length(&asset, &work_area).value, expected);
    }

    #[test]
    fn empty_road_sections_measure_zero() {
        let asset = AssetGeometry::Polygon {
            polygon: rect(0.2, 0.2, 0.8, 0.8),
            road_sections: Some(vec![]),
        };
        assert_eq!(compute_asset_length(&asset, &unit_square()), Length::zero());
    }

    #[test_case(AssetGeometry::Point(Point::new(0.5, 0.5)); "point")]
    #[test_case(AssetGeometry::Unsupported(GeometryKind::MultiPolygon); "multi polygon")]
    #[test_case(AssetGeometry::Unsupported(GeometryKind::GeometryCollection); "geometry collection")]
    fn assets_without_linear_extent_measure_zero(asset: AssetGeometry) {
        assert_eq!(compute_asset_length(&asset, &unit_square()), Length::zero());
    }

    #[test_case(AssetGeometry::LineString(line(&[(-1.0, 0.5), (2.0, 0.5)])); "crossing line")]
    #[test_case(AssetGeometry::LineString(line(&[(3.0, 3.0), (4.0, 4.0)])); "disjoint line")]
    #[test_case(AssetGeometry::LineString(line(&[(0.0, 1.0), (1.0, 1.0)])); "boundary line")]
    #[test_case(AssetGeometry::MultiLineString(MultiLineString::new(vec![])); "empty multi line")]
    #[test_case(polygon_asset(rect(-1.0, -1.0, 2.0, 2.0)); "surrounding polygon")]
    fn lengths_are_non_negative(asset: AssetGeometry) {
        let length = compute_asset_length(&asset, &unit_square());
        assert!(length.value >= 0.0 && length.value.is_finite());
    }

    #[test]
    fn parallel_batch_matches_sequential() {
        let work_area = WorkArea::MultiPolygon(MultiPolygon::new(vec![
            rect(0.0, 0.0, 1.0, 1.0),
            rect(2.0, 0.0, 3.0, 1.0),
        ]));
        let assets = (0..64)
            .map(|i| {
                let y = i as f64 / 64.0;
                AssetGeometry::LineString(line(&[(-1.0, y), (4.0, 1.0 - y)]))
            })
            .collect::<Vec<_>>();

        let calculator = AssetLengthCalculator::default();
        assert_eq!(
            calculator.lengths(&assets, &work_area),
            calculator.lengths_sequential(&assets, &work_area)
        );
    }

    #[test]
    fn clipped_pieces_add_up_to_clipped_length() {
        let calculator = AssetLengthCalculator::default();
        let asset = AssetGeometry::LineString(crossing_line());
        let work_area = unit_square();

        let pieces = calculator.clipped_pieces(&asset, &work_area);
        assert_eq!(pieces.len(), 1);

        let pieces_length: f64 = pieces.iter().map(geodesic_length).sum();
        assert_close(pieces_length, calculator.length(&asset, &work_area).value);
    }
}
