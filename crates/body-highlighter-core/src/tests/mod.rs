mod datasets;
mod reconcile;
mod selection;
