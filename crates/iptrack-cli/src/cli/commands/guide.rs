//! `iptrack guide` - Find your local IP address.

use anyhow::Result;

use super::Context;
use crate::cli::args::GuideArgs;
use crate::education::print_local_ip_guide;

pub fn execute(_ctx: &Context, args: &GuideArgs) -> Result<()> {
    print_local_ip_guide(args.os);
    Ok(())
}
