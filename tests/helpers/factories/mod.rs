pub mod default_values_factory;
pub mod insert_batch_factory;
pub mod table_schema_factory;

pub use default_values_factory::DefaultValuesFactory;
pub use insert_batch_factory::InsertBatchFactory;
pub use table_schema_factory::TableSchemaFactory;

#[cfg(test)]
mod default_values_factory_test;
#[cfg(test)]
mod insert_batch_factory_test;
#[cfg(test)]
mod table_schema_factory_test;
