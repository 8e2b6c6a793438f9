pub mod xyz;
