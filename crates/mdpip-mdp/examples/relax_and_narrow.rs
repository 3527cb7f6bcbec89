use std::path::PathBuf;

use mdpip_core::{
    Action, ImprecisionConfig, ImprecisionGenerator, NarrowingRangeGenerator,
    RelaxedRangeGenerator, State,
};
use mdpip_mdp::{MdpBuilder, MdpSimulator};

fn main() {
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => ImprecisionConfig::from_yaml_path(&path).expect("failed to load config"),
        None => ImprecisionConfig::default(),
    };

    let mut builder = MdpBuilder::new();
    builder
        .set_start("corridor")
        .add_state("corridor", false)
        .add_state("ditch", false)
        .add_state("goal", true);
    builder
        .add_action("corridor", "forward")
        .expect("corridor exists")
        .add_outcome("corridor", "forward", "goal", 0.6, 1.0)
        .expect("forward exists")
        .add_outcome("corridor", "forward", "ditch", 0.3, -1.0)
        .expect("forward exists")
        .add_outcome("corridor", "forward", "corridor", 0.1, 0.0)
        .expect("forward exists");
    builder
        .add_action("ditch", "climb")
        .expect("ditch exists")
        .add_outcome("ditch", "climb", "corridor", 1.0, -0.1)
        .expect("climb exists");
    let mdp = builder.build().expect("invalid nominal MDP");

    let base = RelaxedRangeGenerator::from_config(&mdp, &config).expect("invalid relaxation");
    let narrowing =
        NarrowingRangeGenerator::from_config(&base, &config).expect("invalid step variation");

    let (corridor, forward, goal) = (
        State::from("corridor"),
        Action::from("forward"),
        State::from("goal"),
    );

    // An adversary keeps choosing the least favourable admissible probability.
    let mut range = base
        .generate_range(&corridor, &forward, &goal, 0.6)
        .expect("transition is cached");
    for round in 1..=3 {
        let chosen = range.low();
        range = narrowing
            .generate_range(&corridor, &forward, &goal, chosen)
            .expect("chosen probability is admissible");
        println!("round={round} chosen={chosen:.4} narrowed={range}");
    }

    let mut simulator = MdpSimulator::new(mdp, 12345);
    let (next, reward, terminal) = simulator.step(&corridor, &forward);
    println!("sampled next={next} reward={reward} terminal={terminal}");

    println!(
        "{}",
        base.snapshot().to_json().expect("snapshot serializes")
    );
}
