use approx::assert_relative_eq;
use rayon::prelude::*;
use stencil::{BluePrint, BluePrintBase, BluePrintFactory, Build};
use stencil_linalg::*;

fn init_logger() {
    env_logger::builder().is_test(true).try_init().ok();
}

fn random_mat3() -> Mat3f {
    Matrix::from_fn(|_, _| fastrand::f32() * 200.0 - 100.0)
}

#[test]
fn fill_seven() {
    init_logger();

    let bp = BluePrintFactory::<Array<i64>>::fill(12, 7);
    let fresh = bp.implement_instantiate::<Array<i64>>();
    assert_eq!(fresh.len(), 12);
    assert!(fresh.iter().all(|&e| e == 7));

    for _ in 0..50 {
        let len = fastrand::usize(0..40);
        let mut existing: Array<i64> = (0..len).map(|_| fastrand::i64(..)).collect();
        bp.implement_apply::<Array<i64>>(&mut existing);
        assert_eq!(existing, fresh);
    }
}

#[test]
fn matrix_apply_overwrites_everything() {
    let identity = BluePrintFactory::<Mat3f>::identity();
    let constant = BluePrintFactory::<Mat3f>::constant(0.25);

    for _ in 0..20 {
        let mut m = random_mat3();
        m.configure(&identity);
        assert_eq!(m, Mat3f::identity());

        m.configure(&constant);
        for &elem in m.iter() {
            assert_relative_eq!(elem, 0.25);
        }
    }
}

#[test]
fn identity_is_multiplicative_neutral() {
    let i = Mat3f::build(&BluePrintFactory::<Mat3f>::identity());
    let m = random_mat3();
    for (a, b) in (m * i).iter().zip(m.iter()) {
        assert_relative_eq!(*a, *b);
    }
}

#[test]
fn diagonal_trace() {
    let diag = BluePrintFactory::<Mat4f>::diagonal([0.5, 1.5, 2.5, 3.5]);
    let m = diag.implement_instantiate::<Mat4f>();
    assert_relative_eq!(m.trace(), 8.0);
}

#[test]
fn independent_instances() {
    let bp = BluePrintFactory::<Array<u16>>::sequence(5, 0, 3);
    let mut a = Array::build(&bp);
    let b = Array::build(&bp);
    a[0] = 999;
    assert_eq!(b, [0, 3, 6, 9, 12]);
    assert_ne!(a, b);
}

#[test]
fn shared_across_threads() {
    init_logger();

    let bp = BluePrintFactory::<Array<f64>>::fill(256, 1.5);
    let mut targets: Vec<Array<f64>> = (0..64)
        .map(|i| Array::from_vec(vec![i as f64; i]))
        .collect();

    targets.par_iter_mut().for_each(|target| bp.apply(target));

    let expected = bp.instantiate();
    assert!(targets.iter().all(|t| *t == expected));
}
