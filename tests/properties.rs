use proptest::prelude::*;

use u_georoute::distance::{haversine_km, DistanceMatrix};
use u_georoute::evaluation::tour_distance;
use u_georoute::local_search::two_opt_improve;
use u_georoute::models::Coordinate;
use u_georoute::optimizer::{optimize, Method, RouteOptimizer};
use u_georoute::Error;

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..90.0, -180.0f64..180.0)
        .prop_map(|(lat, lon)| Coordinate::new(lat, lon).expect("in range"))
}

fn coordinates(range: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Coordinate>> {
    prop::collection::vec(coordinate(), range)
}

fn sorted(mut coords: Vec<Coordinate>) -> Vec<Coordinate> {
    coords.sort_by(|a, b| {
        a.lat()
            .total_cmp(&b.lat())
            .then(a.lon().total_cmp(&b.lon()))
    });
    coords
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(a in coordinate()) {
        prop_assert_eq!(haversine_km(&a, &a), 0.0);
    }

    #[test]
    fn distance_is_symmetric(a in coordinate(), b in coordinate()) {
        prop_assert_eq!(haversine_km(&a, &b), haversine_km(&b, &a));
    }

    #[test]
    fn distance_is_bounded(a in coordinate(), b in coordinate()) {
        let d = haversine_km(&a, &b);
        prop_assert!(d >= 0.0);
        prop_assert!(d <= std::f64::consts::PI * 6371.0 + 1e-6);
    }

    #[test]
    fn tour_distance_rotation_invariant(route in coordinates(0..12), k in 0usize..12) {
        let mut rotated = route.clone();
        if !rotated.is_empty() {
            let shift = k % rotated.len();
            rotated.rotate_left(shift);
        }
        prop_assert!(close(tour_distance(&route), tour_distance(&rotated)));
    }

    #[test]
    fn tour_distance_reversal_invariant(route in coordinates(0..12)) {
        let mut reversed = route.clone();
        reversed.reverse();
        prop_assert!(close(tour_distance(&route), tour_distance(&reversed)));
    }

    #[test]
    fn tiny_inputs_have_one_cycle_length(coords in coordinates(0..4)) {
        let exact = optimize(&coords, Method::Exact).expect("ok");
        let nn = optimize(&coords, Method::NearestNeighbor).expect("ok");
        prop_assert!(close(exact.distance(), nn.distance()));
    }

    #[test]
    fn two_opt_never_increases(coords in coordinates(0..25)) {
        let dm = DistanceMatrix::from_coordinates(&coords);
        let identity: Vec<usize> = (0..coords.len()).collect();
        let before = dm.tour_length(&identity);
        let (improved, after) = two_opt_improve(&identity, &dm, 1000);
        prop_assert!(after <= before + 1e-9);
        prop_assert_eq!(improved.len(), identity.len());
    }

    #[test]
    fn every_method_returns_a_permutation(coords in coordinates(0..8), m in 0usize..4) {
        let method = Method::ALL[m];
        let sol = optimize(&coords, method).expect("ok");
        prop_assert_eq!(sorted(sol.route().to_vec()), sorted(coords.clone()));
        prop_assert_eq!(sol.distance(), tour_distance(sol.route()));
        if let Some(first) = coords.first() {
            prop_assert_eq!(sol.route()[0], *first);
        }
    }

    #[test]
    fn exact_is_never_beaten(coords in coordinates(2..7)) {
        let exact = optimize(&coords, Method::Exact).expect("ok");
        let two = optimize(&coords, Method::TwoOpt).expect("ok");
        let nn = optimize(&coords, Method::NearestNeighbor).expect("ok");
        prop_assert!(exact.distance() <= two.distance() + 1e-9);
        prop_assert!(exact.distance() <= nn.distance() + 1e-9);
    }

    #[test]
    fn single_point_is_returned_as_is(p in coordinate(), m in 0usize..4) {
        let sol = optimize(&[p], Method::ALL[m]).expect("ok");
        prop_assert_eq!(sol.route(), &[p][..]);
        prop_assert_eq!(sol.distance(), 0.0);
    }

    #[test]
    fn bogus_method_is_rejected(coords in coordinates(1..10)) {
        let err = RouteOptimizer::default().optimize_named(&coords, "bogus").unwrap_err();
        prop_assert!(matches!(err, Error::InvalidMethod(_)));
    }
}

#[test]
fn empty_input_for_every_method() {
    for m in Method::ALL {
        let sol = optimize(&[], m).expect("ok");
        assert!(sol.route().is_empty());
        assert_eq!(sol.distance(), 0.0);
    }
}
