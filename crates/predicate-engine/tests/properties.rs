use predicate_engine::{DynPredicate, Field, Predicate, PredicateExt, filter};
use proptest::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct Row {
    a: i64,
    b: i64,
    flag: bool,
    name: String,
}

fn arb_row() -> impl Strategy<Value = Row> {
    (-20i64..20, -20i64..20, any::<bool>(), "[ab]{0,4}").prop_map(|(a, b, flag, name)| Row {
        a,
        b,
        flag,
        name,
    })
}

#[derive(Clone, Debug)]
enum Leaf {
    AGreater(i64),
    BLessOrEqual(i64),
    AEquals(i64),
    Flag,
    NamePrefix(String),
    BInRange(i64, i64),
    Constant(bool),
}

#[derive(Clone, Debug)]
enum Shape {
    Leaf(Leaf),
    Not(Box<Shape>),
    And(Box<Shape>, Box<Shape>),
    Or(Box<Shape>, Box<Shape>),
}

fn arb_leaf() -> impl Strategy<Value = Leaf> {
    prop_oneof![
        (-20i64..20).prop_map(Leaf::AGreater),
        (-20i64..20).prop_map(Leaf::BLessOrEqual),
        (-20i64..20).prop_map(Leaf::AEquals),
        Just(Leaf::Flag),
        "[ab]{0,2}".prop_map(Leaf::NamePrefix),
        (-20i64..20, -20i64..20).prop_map(|(s, e)| Leaf::BInRange(s, e)),
        any::<bool>().prop_map(Leaf::Constant),
    ]
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    arb_leaf()
        .prop_map(Shape::Leaf)
        .prop_recursive(4, 24, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(|s| Shape::Not(Box::new(s))),
                (inner.clone(), inner.clone())
                    .prop_map(|(l, r)| Shape::And(Box::new(l), Box::new(r))),
                (inner.clone(), inner).prop_map(|(l, r)| Shape::Or(Box::new(l), Box::new(r))),
            ]
        })
}

fn build_leaf(leaf: &Leaf) -> DynPredicate<Row> {
    let a = Field::new("a", |r: &Row| &r.a);
    let b = Field::new("b", |r: &Row| &r.b);
    match leaf {
        Leaf::AGreater(v) => a.gt(*v).boxed(),
        Leaf::BLessOrEqual(v) => b.lte(*v).boxed(),
        Leaf::AEquals(v) => a.eq(*v).boxed(),
        Leaf::Flag => Field::new("flag", |r: &Row| &r.flag).boxed(),
        Leaf::NamePrefix(p) => Field::new("name", |r: &Row| &r.name)
            .has_prefix(p.clone())
            .boxed(),
        Leaf::BInRange(s, e) => b.in_range(*s..*e).boxed(),
        Leaf::Constant(c) => predicate_engine::BoolLiteral::new(*c).boxed(),
    }
}

fn build(shape: &Shape) -> DynPredicate<Row> {
    match shape {
        Shape::Leaf(leaf) => build_leaf(leaf),
        Shape::Not(inner) => build(inner).negate().boxed(),
        Shape::And(l, r) => build(l).and(build(r)).boxed(),
        Shape::Or(l, r) => build(l).or(build(r)).boxed(),
    }
}

fn oracle(shape: &Shape, row: &Row) -> bool {
    match shape {
        Shape::Leaf(Leaf::AGreater(v)) => row.a > *v,
        Shape::Leaf(Leaf::BLessOrEqual(v)) => row.b <= *v,
        Shape::Leaf(Leaf::AEquals(v)) => row.a == *v,
        Shape::Leaf(Leaf::Flag) => row.flag,
        Shape::Leaf(Leaf::NamePrefix(p)) => row.name.starts_with(p.as_str()),
        Shape::Leaf(Leaf::BInRange(s, e)) => *s <= row.b && row.b < *e,
        Shape::Leaf(Leaf::Constant(c)) => *c,
        Shape::Not(inner) => !oracle(inner, row),
        Shape::And(l, r) => oracle(l, row) && oracle(r, row),
        Shape::Or(l, r) => oracle(l, row) || oracle(r, row),
    }
}

proptest! {
    #[test]
    fn tree_matches_oracle(shape in arb_shape(), row in arb_row()) {
        prop_assert_eq!(build(&shape).evaluate(&row), oracle(&shape, &row));
    }

    #[test]
    fn negation_inverts(shape in arb_shape(), row in arb_row()) {
        let p = build(&shape);
        let expected = !p.evaluate(&row);
        prop_assert_eq!(p.negate().evaluate(&row), expected);
    }

    #[test]
    fn conjunction_and_disjunction(l in arb_shape(), r in arb_shape(), row in arb_row()) {
        let (pl, pr) = (build(&l).evaluate(&row), build(&r).evaluate(&row));
        prop_assert_eq!(build(&l).and(build(&r)).evaluate(&row), pl && pr);
        prop_assert_eq!(build(&l).or(build(&r)).evaluate(&row), pl || pr);
    }

    #[test]
    fn evaluation_is_idempotent(shape in arb_shape(), row in arb_row()) {
        let p = build(&shape);
        let first = p.evaluate(&row);
        prop_assert_eq!(p.evaluate(&row), first);
        prop_assert_eq!(p.evaluate(&row), first);
    }

    #[test]
    fn filter_equals_manual_selection(
        shape in arb_shape(),
        rows in prop::collection::vec(arb_row(), 0..16),
    ) {
        let p = build(&shape);
        let expected: Vec<Row> = rows.iter().filter(|r| oracle(&shape, r)).cloned().collect();
        prop_assert_eq!(filter(rows, &p), expected);
    }

    #[test]
    fn range_boundaries(start in -50i64..50, len in 1i64..20) {
        let b = Field::new("b", |r: &Row| &r.b);
        let pred = b.in_range(start..start + len);
        let at = |v| Row { a: 0, b: v, flag: false, name: String::new() };
        prop_assert!(pred.evaluate(&at(start)));
        prop_assert!(!pred.evaluate(&at(start + len)));
        prop_assert!(!pred.evaluate(&at(start - 1)));
    }
}
