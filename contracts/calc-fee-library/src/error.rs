use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Returned when `fee_rate > 100 * 10^precision`, i.e. the fee would
    /// exceed the whole amount
    RateExceedsMaximum = 1,
}
