/// # Cost Profiling — Calc Fee Library
///
/// ```bash
/// cargo test gas_profile -- --nocapture --test-threads=1
/// ```
///
/// Each call performs a fixed number of 256-bit host operations, so the
/// metered cost must not grow with the magnitude of the inputs.
#[cfg(test)]
mod gas_profile {
    extern crate std;
    use std::println;

    use soroban_sdk::Env;

    use crate::{CalcFeeLibrary, CalcFeeLibraryClient};

    struct BudgetDelta {
        cpu: u64,
        mem: u64,
    }

    /// Capture Soroban budget meters before and after `f`, return the deltas.
    fn measure<F: FnOnce()>(env: &Env, f: F) -> BudgetDelta {
        let cpu_before = env.budget().cpu_instruction_cost();
        let mem_before = env.budget().memory_bytes_cost();
        f();
        BudgetDelta {
            cpu: env.budget().cpu_instruction_cost().saturating_sub(cpu_before),
            mem: env.budget().memory_bytes_cost().saturating_sub(mem_before),
        }
    }

    fn print_row(label: &str, delta: &BudgetDelta) {
        println!("| {:<40} | {:>16} | {:>12} |", label, delta.cpu, delta.mem);
    }

    fn setup(env: &Env) -> CalcFeeLibraryClient<'_> {
        env.budget().reset_unlimited();
        let contract_id = env.register_contract(None, CalcFeeLibrary);
        CalcFeeLibraryClient::new(env, &contract_id)
    }

    #[test]
    fn gas_profile_calc_fee_independent_of_amount() {
        let env = Env::default();
        let client = setup(&env);

        env.budget().reset_unlimited();
        let small = measure(&env, || {
            client.calc_fee(&10, &5);
        });
        env.budget().reset_unlimited();
        let large = measure(&env, || {
            client.calc_fee(&u128::MAX, &99);
        });

        print_row("calc_fee(10, 5)", &small);
        print_row("calc_fee(u128::MAX, 99)", &large);

        assert!(small.cpu > 0);
        assert!(large.cpu <= small.cpu * 2, "cost grew with amount");
    }

    #[test]
    fn gas_profile_precision_independent_of_value() {
        let env = Env::default();
        let client = setup(&env);

        env.budget().reset_unlimited();
        let low = measure(&env, || {
            client.calc_final_with_precision(&1_000_000, &1, &2);
        });
        env.budget().reset_unlimited();
        let high = measure(&env, || {
            client.calc_final_with_precision(&u128::MAX, &u128::MAX, &60);
        });

        print_row("calc_final_with_precision(p = 2)", &low);
        print_row("calc_final_with_precision(p = 60)", &high);

        assert!(high.cpu <= low.cpu * 2, "cost grew with precision");
    }
}
