/// Masking state of a password field, driven by its companion checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldVisibility {
    Masked,
    Plain,
}

impl FieldVisibility {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Self::Plain
        } else {
            Self::Masked
        }
    }

    /// Value for the input's `type` attribute.
    pub fn as_input_type(self) -> &'static str {
        match self {
            Self::Masked => "password",
            Self::Plain => "text",
        }
    }
}

/// An input whose `type` can be flipped between `password` and `text`.
pub trait MaskableField {
    fn input_type(&self) -> String;
    fn set_input_type(&self, value: &str);
}

/// Bring `field` in line with the checkbox state. Returns whether the field
/// changed; repeated calls with the same state are no-ops.
pub fn apply_visibility<F: MaskableField + ?Sized>(field: &F, checked: bool) -> bool {
    let wanted = FieldVisibility::from_checked(checked).as_input_type();
    if field.input_type() == wanted {
        return false;
    }
    field.set_input_type(wanted);
    true
}

/// A show/hide checkbox, able to find the group that encloses it.
pub trait ToggleControl {
    type Group: FieldGroup;

    fn is_checked(&self) -> bool;
    fn enclosing_group(&self, selector: &str) -> Option<Self::Group>;
}

/// The container pairing a checkbox with the field it reveals.
pub trait FieldGroup {
    type Field: MaskableField;

    fn first_field(&self, selector: &str) -> Option<Self::Field>;
}

/// Handle a change on `checkbox`: flip the first matching field inside its
/// group. Nothing happens without a group or a field.
pub fn sync_companion<C: ToggleControl>(
    checkbox: &C,
    group_selector: &str,
    field_selector: &str,
) -> bool {
    checkbox
        .enclosing_group(group_selector)
        .and_then(|group| group.first_field(field_selector))
        .is_some_and(|field| apply_visibility(&field, checkbox.is_checked()))
}
