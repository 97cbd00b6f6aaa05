// demos/chain_prompts.rs

use prompt_limiter::prompt::Chain;

fn step_upper(s: String) -> String {
    s.to_uppercase()
}

fn step_exclaim(s: String) -> String {
    s + "!!!"
}

fn main() {
    let chain = Chain::new().then(step_upper).then(step_exclaim);
    println!("{}", chain.run("hello".to_string()));
}
