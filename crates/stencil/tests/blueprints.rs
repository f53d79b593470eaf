use std::cell::Cell;

use itertools::Itertools;
use stencil::{Adapter, BluePrint, BluePrintBase, BluePrintFactory, Build};

const N: usize = 16;

/// Produces `N` copies of its value, and resizes existing containers to match.
#[derive(Debug, Clone, Copy)]
struct FillBlueprint(i32);

impl BluePrint for FillBlueprint {
    type Base = Vec<i32>;

    fn instantiate(&self) -> Vec<i32> {
        vec![self.0; N]
    }

    fn apply(&self, object: &mut Vec<i32>) {
        object.clear();
        object.resize(N, self.0);
    }
}

stencil::assert_blueprint!(FillBlueprint => Vec<i32>);

fn random_vec() -> Vec<i32> {
    let len = fastrand::usize(0..64);
    (0..len).map(|_| fastrand::i32(..)).collect()
}

#[test]
fn fill_instantiate() {
    let v = FillBlueprint(7).implement_instantiate::<Vec<i32>>();
    assert_eq!(v.len(), N);
    assert!(v.iter().all(|&e| e == 7));
}

#[test]
fn fill_apply_ignores_prior_contents() {
    let bp = FillBlueprint(7);
    let expected = bp.implement_instantiate::<Vec<i32>>();
    for _ in 0..100 {
        let mut existing = random_vec();
        bp.implement_apply::<Vec<i32>>(&mut existing);
        assert_eq!(existing, expected);
    }
}

#[test]
fn instances_are_independent() {
    let bp = FillBlueprint(3);
    let mut a = bp.implement_instantiate::<Vec<i32>>();
    let b = bp.implement_instantiate::<Vec<i32>>();
    assert_ne!(a.as_ptr(), b.as_ptr());

    a[0] = -1;
    a.push(100);
    assert_eq!(b, vec![3; N]);
    // The blueprint itself is unaffected too.
    assert_eq!(bp.implement_instantiate::<Vec<i32>>(), b);
}

#[test]
fn apply_is_deterministic() {
    let bp = FillBlueprint(-5);
    let start = random_vec();
    let mut a = start.clone();
    let mut b = start;

    bp.implement_apply::<Vec<i32>>(&mut a);
    bp.implement_apply::<Vec<i32>>(&mut b);
    assert_eq!(a, b);

    // Applying twice changes nothing further.
    bp.implement_apply::<Vec<i32>>(&mut a);
    assert_eq!(a, b);
}

#[test]
fn sentinel_forwarding() {
    struct Sentinel<'a> {
        calls: &'a Cell<(u32, u32)>,
    }

    impl BluePrint for Sentinel<'_> {
        type Base = (u64, char);

        fn instantiate(&self) -> (u64, char) {
            let (i, a) = self.calls.get();
            self.calls.set((i + 1, a));
            (0x5E47_1E1, 'i')
        }

        fn apply(&self, object: &mut (u64, char)) {
            let (i, a) = self.calls.get();
            self.calls.set((i, a + 1));
            object.1 = 'a';
        }
    }

    let calls = Cell::new((0, 0));
    let adapter = Adapter::new(Sentinel { calls: &calls });

    let mut target = adapter.implement_instantiate::<(u64, char)>();
    assert_eq!(target, (0x5E47_1E1, 'i'));
    assert_eq!(calls.get(), (1, 0));

    adapter.implement_apply::<(u64, char)>(&mut target);
    assert_eq!(target, (0x5E47_1E1, 'a'));
    assert_eq!(calls.get(), (1, 1));
}

#[test]
fn generic_call_sites() {
    fn stamp<B: BluePrint>(blueprint: &B, count: usize) -> Vec<B::Base> {
        (0..count).map(|_| <B::Base as Build>::build(blueprint)).collect()
    }

    let copies = stamp(&FillBlueprint(1), 3);
    assert!(copies.iter().all_equal());

    // Unrelated blueprints for the same base type go through the same call site.
    let cloned = stamp(&BluePrintFactory::cloned(vec![4, 5]), 2);
    assert_eq!(cloned, [vec![4, 5], vec![4, 5]]);

    let boxed: Box<dyn BluePrint<Base = Vec<i32>>> = Box::new(FillBlueprint(2));
    let mut v = Vec::new();
    v.configure(&boxed);
    assert_eq!(v, vec![2; N]);
}

#[test]
fn apply_only_touches_what_the_recipe_covers() {
    struct Label {
        text: String,
        hits: u32,
    }

    struct Caption(&'static str);

    impl BluePrint for Caption {
        type Base = Label;

        fn instantiate(&self) -> Label {
            Label {
                text: self.0.to_string(),
                hits: 0,
            }
        }

        fn apply(&self, label: &mut Label) {
            label.text.clear();
            label.text.push_str(self.0);
        }
    }

    let mut label = Label {
        text: String::with_capacity(32),
        hits: 12,
    };
    let ptr = label.text.as_ptr();
    label.configure(&Caption("ok"));
    assert_eq!(label.text, "ok");
    assert_eq!(label.text.as_ptr(), ptr);
    assert_eq!(label.hits, 12);
    assert_eq!(Label::build(&Caption("ok")).hits, 0);
}
