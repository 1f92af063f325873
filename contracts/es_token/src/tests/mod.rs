mod redeem;
mod setup;
