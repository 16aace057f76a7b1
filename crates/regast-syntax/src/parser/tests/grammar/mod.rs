mod alternations_tests;
mod atoms_tests;
mod classes_tests;
mod conditionals_tests;
mod groups_tests;
mod quantifiers_tests;
mod references_tests;
mod trivia_tests;
