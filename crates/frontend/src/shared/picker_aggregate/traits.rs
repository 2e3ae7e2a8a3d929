/// Item that can be chosen through [`GenericAggregatePicker`](super::GenericAggregatePicker)
pub trait AggregatePickerResult {
    fn id(&self) -> String;
    fn display_name(&self) -> String;
}
