use lifo_stack::{EmptyStackError, Stack};

// This example checks bracket balancing, the classic use for a stack. Run with RUST_LOG=trace to
// see every push and pop.
fn balanced(input: &str) -> Result<bool, EmptyStackError> {
    let mut open = Stack::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '(' | '[' | '{' => open.push(c),
            ')' | ']' | '}' => {
                let expected = match open.pop()? {
                    '(' => ')',
                    '[' => ']',
                    _ => '}',
                };
                if c != expected {
                    return Ok(false);
                }
            }
            _ => (),
        }
    }
    Ok(open.is_empty())
}

fn main() {
    env_logger::init();
    for input in ["(a[b]{c})", "([)]", "((", "())"] {
        match balanced(input) {
            Ok(ok) => println!("{input}: balanced = {ok}"),
            Err(error) => println!("{input}: {error}"),
        }
    }
}
