//! Generates the base-2^32 <-> base-58^5 conversion tables.
//!
//! Each row is one power of the source radix written out in the target
//! radix, most significant limb first. The encoder multiplies its 32-bit
//! limbs by the `ENC_*` rows and the decoder multiplies its 58^5 limbs by
//! the `DEC_*` rows.

use std::{env, fmt::Write as _, fs, path::PathBuf};

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive, Zero};

const BINARY_SZ_32: usize = 8;
const BINARY_SZ_64: usize = 16;
const INTERMEDIATE_SZ_32: usize = 9;
const INTERMEDIATE_SZ_64: usize = 18;

/// Splits `value` into exactly `count` limbs of `radix`, most significant first.
fn to_limbs(mut value: BigUint, radix: &BigUint, count: usize) -> Vec<u32> {
    let mut limbs = vec![0u32; count];
    for limb in limbs.iter_mut().rev() {
        *limb = (&value % radix)
            .to_u32()
            .expect("limb is below a radix that fits in u32");
        value /= radix;
    }
    assert!(value.is_zero(), "power does not fit in {count} limbs");
    limbs
}

/// Row `j` holds 2^(32*(binary_sz-1-j)) in base 58^5.
fn enc_table(binary_sz: usize, intermediate_sz: usize) -> Vec<Vec<u32>> {
    let r1div = BigUint::from(58u32).pow(5);
    (0..binary_sz)
        .map(|j| {
            let power = BigUint::one() << (32 * (binary_sz - 1 - j));
            to_limbs(power, &r1div, intermediate_sz - 1)
        })
        .collect()
}

/// Row `j` holds 58^(5*(intermediate_sz-1-j)) in base 2^32.
fn dec_table(binary_sz: usize, intermediate_sz: usize) -> Vec<Vec<u32>> {
    let radix = BigUint::one() << 32;
    (0..intermediate_sz)
        .map(|j| {
            let power = BigUint::from(58u32).pow(5 * (intermediate_sz - 1 - j) as u32);
            to_limbs(power, &radix, binary_sz)
        })
        .collect()
}

fn write_table(out: &mut String, doc: &str, name: &str, rows: &str, cols: &str, table: &[Vec<u32>]) {
    writeln!(out, "#[doc = {doc:?}]").unwrap();
    writeln!(out, "pub const {name}: [[u32; {cols}]; {rows}] = [").unwrap();
    for row in table {
        let row = row
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(out, "    [{row}],").unwrap();
    }
    writeln!(out, "];").unwrap();
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");

    let mut out = String::new();
    write_table(
        &mut out,
        "Base-58^5 limbs of 2^(32*(7-j)) for each of the 8 binary limbs of a 32-byte value.",
        "ENC_TABLE_32",
        "BINARY_SZ_32",
        "INTERMEDIATE_SZ_32 - 1",
        &enc_table(BINARY_SZ_32, INTERMEDIATE_SZ_32),
    );
    write_table(
        &mut out,
        "Base-58^5 limbs of 2^(32*(15-j)) for each of the 16 binary limbs of a 64-byte value.",
        "ENC_TABLE_64",
        "BINARY_SZ_64",
        "INTERMEDIATE_SZ_64 - 1",
        &enc_table(BINARY_SZ_64, INTERMEDIATE_SZ_64),
    );
    write_table(
        &mut out,
        "Base-2^32 limbs of 58^(5*(8-j)) for each of the 9 intermediate limbs of a 32-byte value.",
        "DEC_TABLE_32",
        "INTERMEDIATE_SZ_32",
        "BINARY_SZ_32",
        &dec_table(BINARY_SZ_32, INTERMEDIATE_SZ_32),
    );
    write_table(
        &mut out,
        "Base-2^32 limbs of 58^(5*(17-j)) for each of the 18 intermediate limbs of a 64-byte value.",
        "DEC_TABLE_64",
        "INTERMEDIATE_SZ_64",
        "BINARY_SZ_64",
        &dec_table(BINARY_SZ_64, INTERMEDIATE_SZ_64),
    );

    let path = PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR is set by cargo"))
        .join("tables.rs");
    fs::write(path, out).expect("failed to write conversion tables");
}
