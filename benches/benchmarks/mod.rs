pub mod predicates;
