//! Stamps out arrays from a `Fill` blueprint and reconfigures an existing one.
//!
//! Usage: `fill <len> <value>`

use anyhow::{bail, Context};
use stencil::{BluePrintBase, BluePrintFactory};
use stencil_linalg::{Array, ArrayBluePrints};

fn main() -> anyhow::Result<()> {
    stencil::init_logger!();

    let mut args = std::env::args().skip(1);
    let (len, value) = match (args.next(), args.next()) {
        (Some(len), Some(value)) => (len, value),
        _ => bail!("usage: fill <len> <value>"),
    };
    let len: usize = len.parse().with_context(|| format!("invalid length `{len}`"))?;
    let value: i64 = value
        .parse()
        .with_context(|| format!("invalid value `{value}`"))?;

    let bp = BluePrintFactory::<Array<i64>>::fill(len, value);

    let first = bp.implement_instantiate::<Array<i64>>();
    let second = bp.implement_instantiate::<Array<i64>>();
    log::info!("instantiated twice: {:?} / {:?}", first, second);

    let mut existing: Array<i64> = (0..len as i64 * 2).collect();
    log::debug!("before apply: {:?}", existing);
    bp.implement_apply::<Array<i64>>(&mut existing);
    log::info!("after apply: {:?}", existing);

    Ok(())
}
