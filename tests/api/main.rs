// fn main not required
mod contact;
mod health_check;
mod helpers;

// black-box tests are most robust, as they reflect exactly how clients
// interact with the API (request type, path, encoding). each test spawns the
// full application on a random port, with a wiremock server standing in for
// the hosted email relay.
