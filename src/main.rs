use rand::thread_rng;
use reorder_planner::io::reporting;
use reorder_planner::{
    plan_fixed_period, plan_fixed_quantity, project_fixed_period, DemandSample, FixedPeriodParams,
    FixedQuantityParams, ReplenishmentSimulation, ServiceLevel, SimulationConfig,
};

fn main() {
    println!("=== Inventory Reorder Planner ===");

    // 1. FIXED-QUANTITY POLICY
    // Reorder a fixed amount whenever stock falls to the reorder point.
    println!("\n--- Fixed-Quantity Policy ---");
    let quantity_params = FixedQuantityParams {
        lead_time_days: 3,
        demand: DemandSample::new([21.0, 17.0, 20.0, 28.0, 16.0, 22.0, 16.0])
            .expect("reference sample is non-negative"),
        service_level: ServiceLevel::new(10.0),
    };

    match plan_fixed_quantity(&quantity_params) {
        Ok(result) => {
            println!("Safety stock:         {:.0} units", result.safety_stock);
            println!("Reorder point:        {:.0} units", result.reorder_point);
            println!(
                "Average daily demand: {:.1} units",
                result.average_daily_demand
            );
            println!("Demand std dev:       {:.1} units", result.demand_std_dev);
            println!(
                "Coefficient of var.:  {:.1}%",
                result.coefficient_of_variation_pct()
            );
            println!("Z-score:              {:.2}", result.z_score);
            println!("Service level:        {:.1}%", result.service_level_pct);
            for warning in &result.warnings {
                println!("Warning: {warning}");
            }

            // 2. SIMULATE THE INVENTORY TRAJECTORY
            let config = SimulationConfig::default();
            let mut sim = ReplenishmentSimulation::new(
                &result,
                quantity_params.lead_time_days,
                config,
            )
            .expect("policy std dev is non-negative");
            let mut rng = thread_rng();
            sim.run(&mut rng);

            let output_file = "fixed_quantity_trace.csv";
            match reporting::write_trace_csv(output_file, &sim.trace) {
                Ok(_) => println!("Trace written to ./{output_file}"),
                Err(e) => eprintln!("Error writing CSV: {e}"),
            }
        }
        Err(e) => eprintln!("Calculation failed: {e}"),
    }

    // 3. FIXED-PERIOD POLICY
    // Order up to a target level at fixed review intervals.
    println!("\n--- Fixed-Period Policy ---");
    let period_params = FixedPeriodParams {
        lead_time_days: 3,
        review_cycle_days: 7,
        current_inventory: 80.0,
        demand: DemandSample::new([35.0, 22.0, 15.0, 19.0, 13.0, 14.0, 22.0])
            .expect("reference sample is non-negative"),
        service_level: ServiceLevel::new(20.0),
    };

    match plan_fixed_period(&period_params) {
        Ok(result) => {
            println!("Safety stock:         {:.0} units", result.safety_stock);
            println!("Target level:         {:.0} units", result.target_level);
            println!(
                "Order quantity:       {:.0} units",
                result.recommended_order_quantity()
            );
            println!("Risk period:          {} days", result.risk_period_days);
            println!(
                "Expected demand:      {:.0} units over the risk period",
                result.expected_demand_over_risk_period
            );
            println!("Service level:        {:.1}%", result.service_level_pct);
            if result.order_quantity > 0.0 {
                println!(
                    "Recommendation: place an order of {:.0} units",
                    result.order_quantity
                );
            } else {
                println!("Recommendation: no order needed at this time");
            }

            // 4. PROJECT THE REVIEW-CYCLE TRAJECTORY
            let config = SimulationConfig::default();
            let trace = project_fixed_period(&period_params, &result, &config);

            let output_file = "fixed_period_projection.csv";
            match reporting::write_trace_csv(output_file, &trace) {
                Ok(_) => println!("Projection written to ./{output_file}"),
                Err(e) => eprintln!("Error writing CSV: {e}"),
            }
        }
        Err(e) => eprintln!("Calculation failed: {e}"),
    }
}
