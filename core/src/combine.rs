// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chudnovsky_real::{BigFloat, Context};

use crate::series::Finished;
use crate::Error;

/// pi = sqrt(C^3) / (12 * sum)
pub(crate) fn combine(ctx: &Context, finished: &Finished) -> Result<BigFloat, Error> {
    let Finished { sum, c3 } = finished;
    let root = ctx.sqrt(c3)?;
    let denom = ctx.mul_int(sum, 12);
    Ok(ctx.div(&root, &denom)?)
}
