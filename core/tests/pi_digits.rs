// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chudnovsky_core::{calculate, compute_pi, estimate, Error, Precision};
use chudnovsky_real::{BigFloat, Context};

fn true_digits() -> String {
    LONG_PI
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
}

thread_local! {
    static REFERENCE: (Context, BigFloat) = {
        let ctx = Context::new(4000).unwrap();
        let pi = ctx.parse(&true_digits()).unwrap();
        (ctx, pi)
    };
}

fn error_of(value: &BigFloat) -> BigFloat {
    REFERENCE.with(|(ctx, pi)| ctx.sub(value, pi).abs())
}

/// 10^-digits
fn tolerance(digits: i64) -> BigFloat {
    REFERENCE.with(|(ctx, _)| {
        let ten = ctx.from_int(10);
        if digits >= 0 {
            ctx.div(&ctx.one(), &ctx.pow(&ten, digits as u64)).unwrap()
        } else {
            ctx.pow(&ten, digits.unsigned_abs())
        }
    })
}

#[test]
fn test_accuracy() {
    for &bits in &[2, 8, 16, 32, 53, 64, 100, 128, 200, 256, 333, 512] {
        let pi = compute_pi(bits).unwrap();
        let digits = estimate::decimal_digits(bits) as i64;
        let error = error_of(&pi);
        assert!(
            error < tolerance(digits - 1),
            "{} bits: error {} exceeds 1e-{}",
            bits,
            error,
            digits - 1
        );
    }
}

#[test]
fn test_thousand_bits() {
    let precision = Precision::new(1000).unwrap();
    let calculation = calculate(precision).unwrap();
    assert_eq!(calculation.iterations, 22);
    assert!(error_of(&calculation.value) < tolerance(299));

    let digits = calculation.to_fixed();
    assert_eq!(digits.len(), 2 + 301);
    // 300 significant digits.
    similar_asserts::assert_eq!(&digits[0..301], &true_digits()[0..301]);
}

#[test]
fn test_two_hundred_bits() {
    let precision = Precision::new(200).unwrap();
    let digits = calculate(precision).unwrap().to_fixed();
    assert_eq!(digits.len(), 2 + 60);
    assert!(digits.starts_with("3.14159265358979"), "{}", digits);
}

#[test]
fn test_one_bit() {
    let pi = compute_pi(1).unwrap();
    assert!(pi.is_positive());
    assert_eq!(pi.bits(), 1);
    assert!(error_of(&pi) < tolerance(-1));

    let calculation = calculate(Precision::new(1).unwrap()).unwrap();
    assert_eq!(calculation.iterations, 1);
    assert!(!calculation.to_fixed().contains('.'));
}

#[test]
fn test_low_precision_digits() {
    // C^3 is inexact at these precisions and has to be rounded once.
    let cases = [(4, "3.2"), (14, "3.1416"), (16, "3.1417"), (18, "3.14159")];
    for &(bits, expected) in &cases {
        let calculation = calculate(Precision::new(bits).unwrap()).unwrap();
        assert_eq!(calculation.to_fixed(), expected, "{} bits", bits);
    }
}

#[test]
fn test_result_precision() {
    for &bits in &[1, 7, 64, 100, 257] {
        assert_eq!(compute_pi(bits).unwrap().bits(), bits);
    }
}

#[test]
fn test_deterministic() {
    let first = compute_pi(333).unwrap();
    let second = compute_pi(333).unwrap();
    assert_eq!(first.mantissa(), second.mantissa());
    assert_eq!(first.exponent(), second.exponent());
}

#[test]
fn test_error_shrinks() {
    let errors = [16, 32, 64, 128, 256, 512, 1000]
        .iter()
        .map(|&bits| error_of(&compute_pi(bits).unwrap()))
        .collect::<Vec<_>>();
    for pair in errors.windows(2) {
        assert!(pair[1] <= pair[0], "{:?} > {:?}", pair[1], pair[0]);
    }
}

#[test]
fn test_zero_bits() {
    assert_eq!(compute_pi(0).unwrap_err(), Error::NotPositive(0));
}

// 1100 digits of pi.
const LONG_PI: &str = r#"3.
1415926535 8979323846 2643383279 5028841971 6939937510
5820974944 5923078164 0628620899 8628034825 3421170679
8214808651 3282306647 0938446095 5058223172 5359408128
4811174502 8410270193 8521105559 6446229489 5493038196
4428810975 6659334461 2847564823 3786783165 2712019091
4564856692 3460348610 4543266482 1339360726 0249141273
7245870066 0631558817 4881520920 9628292540 9171536436
7892590360 0113305305 4882046652 1384146951 9415116094
3305727036 5759591953 0921861173 8193261179 3105118548
0744623799 6274956735 1885752724 8912279381 8301194912
9833673362 4406566430 8602139494 6395224737 1907021798
6094370277 0539217176 2931767523 8467481846 7669405132
0005681271 4526356082 7785771342 7577896091 7363717872
1468440901 2249534301 4654958537 1050792279 6892589235
4201995611 2129021960 8640344181 5981362977 4771309960
5187072113 4999999837 2978049951 0597317328 1609631859
5024459455 3469083026 4252230825 3344685035 2619311881
7101000313 7838752886 5875332083 8142061717 7669147303
5982534904 2875546873 1159562863 8823537875 9375195778
1857780532 1712268066 1300192787 6611195909 2164201989
3809525720 1065485863 2788659361 5338182796 8230301952
0353018529 6899577362 2599413891 2497217752 8347913151
"#;
