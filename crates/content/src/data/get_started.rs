//! Get-started guide sections, in reading order.

use crate::model::ContentEntry;

pub(super) fn entries() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new(
            "register-fields",
            "Register fields",
            "One of the key concepts is to register your component into the \
             hook. This will make its value available for both the form \
             validation and submission.\n\n\
             Note: each field is **required** to have a `name` as a key for the \
             registration process.",
        )
        .with_sample("register"),
        ContentEntry::new(
            "apply-validation",
            "Apply validation",
            "The library makes form validation easy by aligning with the \
             existing HTML standard for form validation.\n\n\
             List of validation rules supported: `required`, `min`, `max`, \
             `minLength`, `maxLength`, `pattern`, `validate`.",
        )
        .with_sample("applyValidation"),
        ContentEntry::new(
            "handle-errors",
            "Handle errors",
            "The library provides an `errors` object to show you the errors in \
             the form. `errors`' type will return given validation constraints.",
        )
        .with_sample("errors"),
        ContentEntry::new(
            "integrate-existing-form",
            "Integrate an existing form",
            "Integrating an existing form should be simple. The important step \
             is to register the component's `ref` and assign relevant props to \
             your input.",
        )
        .with_sample("migrate"),
        ContentEntry::new(
            "integrate-ui-libraries",
            "Integrate with UI libraries",
            "The library has made it easy to integrate with external UI \
             component libraries. If the component doesn't expose the input's \
             `ref`, then you should use the `Controller` component, which will \
             take care of the registration process.",
        )
        .with_sample("uiLibrary"),
        ContentEntry::new(
            "integrate-controlled-inputs",
            "Integrate controlled inputs",
            "This library embraces uncontrolled components and native HTML \
             inputs. However, it's hard to avoid working with external \
             controlled components such as React-Select, AntD and MUI. The \
             wrapper component `Controller` will make it easier to work with \
             them.",
        )
        .with_sample("controlledComponent"),
        ContentEntry::new(
            "integrate-global-state",
            "Integrate global state",
            "The library doesn't require you to have a state management library, \
             but you can easily integrate with one.",
        )
        .with_sample("globalState"),
    ]
}
