use crate::macros::*;
use crate::nillable::Nillable;
use crate::registers::Pre;
use crate::traits::*;

const BNIL: ty!(bool) = nil!();

#[test]
fn truth() {
    assert!(lit!(true).truth());
    assert!(!lit!(false).truth());
    assert!(!BNIL.truth());
}

#[test]
fn all_ops_correct() {
    assert_is!(!lit!(true), lit!(false));
    assert_is!(!BNIL, nil!());
    assert_is!(lit!(true) ^ lit!(false), lit!(true));
    assert_is!(lit!(true) ^ lit!(true), lit!(false));
    assert_is!(lit!(true) & lit!(false), lit!(false));
    assert_is!(lit!(false) | lit!(true), lit!(true));
    assert_is!(BNIL & lit!(false), nil!());
    assert_is!(lit!(2usize) + lit!(3usize), lit!(5usize));
    assert_is!(lit!(4i64) + nil!(), nil!());
}

#[test]
fn partial_equality() {
    assert_eq!(lit!(1i64).eq(lit!(1)), Some(true));
    assert_eq!(lit!(1i64).eq(lit!(2)), Some(false));
    assert_eq!(BNIL.eq(BNIL), None);
    assert!(BNIL.is(nil!()));
}

#[test]
fn ifx_contaminates() {
    let yes: ty!(int) = ifx!((lit!(true)) then { lit!(1) } else { lit!(0) });
    let no: ty!(int) = ifx!((lit!(false)) then { lit!(1) } else { lit!(0) });
    let neither: ty!(int) = ifx!((BNIL) then { lit!(1) } else { lit!(0) });
    assert_is!(yes, lit!(1));
    assert_is!(no, lit!(0));
    assert_is!(neither, nil!());
}

/// `b = false -> not pre b`
#[allow(non_camel_case_types, reason = "dataflow naming convention")]
#[derive(Debug, Default)]
struct blink {
    __clock: usize,
    __trace: bool,
    b: Pre<bool>,
}

impl Step for blink {
    type Input = ();
    type Output = bool;
    fn step(&mut self, _: ty!()) -> ty!(bool) {
        node_trace!(self, "() => blink(b={})", self.b);
        let b = later!(self <~ 0; lit!(false), !pre!(self; b));
        update!(self, b);
        tick!(self);
        b
    }
}

#[test]
fn blink_alternates() {
    let mut node = blink {
        __trace: true,
        ..blink::default()
    };
    let seen: Vec<Option<bool>> = (0..5).map(|_| node.step(()).trusted()).collect();
    assert_eq!(seen, vec![Some(false), Some(true), Some(false), Some(true), Some(false)]);
}

#[test]
fn ty_shapes() {
    let _: ty!() = ();
    let pair: ty!(bool, count) = (lit!(true), lit!(3));
    let _: (Nillable<bool>, Nillable<usize>) = pair;
}
