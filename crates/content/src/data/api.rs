//! API reference entries.
//!
//! One entry per documented API member, in sidebar order. Descriptions are
//! markdown fragments; code fragments inside them are display text only.

use crate::model::ContentEntry;

pub(super) fn entries() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new(
            "register",
            "register",
            "This method allows you to register an input or select element and \
             apply validation rules. Validation rules are all based on the HTML \
             standard and also allow for custom validation methods.\n\n\
             By invoking the register function and supplying an input's name, you \
             will receive the following props: `onChange`, `onBlur`, `name` and \
             `ref`.",
        )
        .with_signature("(name: string, options?: RegisterOptions) => ({ onChange, onBlur, name, ref })")
        .with_sample("register"),
        ContentEntry::new(
            "unregister",
            "unregister",
            "This method allows you to unregister a single input or an array of \
             inputs. It also provides a second optional argument to keep state \
             after unregistering an input.",
        )
        .with_signature("(name: string | string[], options?: Record<string, boolean>) => void"),
        ContentEntry::new(
            "formState",
            "formState",
            "This object contains information about the entire form state. It \
             helps you to keep on track with the user's interaction with your \
             form application.\n\n\
             `errors` contains the validation errors for each field that failed \
             its rules; `isDirty`, `touchedFields` and `isSubmitting` describe \
             the user's interaction so far.",
        )
        .with_signature("Object")
        .with_sample("errors"),
        ContentEntry::new(
            "watch",
            "watch",
            "This method will watch specified inputs and return their values. It \
             is useful to render input value and for determining what to render \
             by condition.",
        )
        .with_signature("(names?: string | string[], defaultValue?: unknown) => unknown"),
        ContentEntry::new(
            "handleSubmit",
            "handleSubmit",
            "This function will receive the form data if form validation is \
             successful.\n\n\
             You can easily submit form asynchronously with handleSubmit. The \
             callback is not invoked while there are validation errors.",
        )
        .with_signature("((data: Object, e?: Event) => Promise<void>, (errors: Object, e?: Event) => Promise<void>) => Function"),
        ContentEntry::new(
            "reset",
            "reset",
            "Reset the entire form state, fields reference, and subscriptions. \
             There are optional arguments and will allow partial form state \
             reset.\n\n\
             `reset` has the ability to retain form state by passing \
             `keepStateOptions`.",
        )
        .with_signature("(values?: Record<string, any>, options?: Record<string, boolean>) => void"),
        ContentEntry::new(
            "setError",
            "setError",
            "The function allows you to manually set one or more errors.\n\n\
             This method will not persist the associated input error if the \
             input passes its validation on the next trigger.",
        )
        .with_signature("(name: string, error: FieldError, { shouldFocus?: boolean }) => void"),
        ContentEntry::new("clearErrors", "clearErrors", "Clear form errors")
            .with_signature("(name?: string | string[]) => void")
            .with_sample("clearError"),
        ContentEntry::new(
            "setValue",
            "setValue",
            "This function allows you to dynamically set the value of a \
             registered field and have the options to validate and update the \
             form state. At the same time, it tries to avoid unnecessary \
             re-renders.",
        )
        .with_signature("(name: string, value: unknown, config?: Object) => void")
        .with_sample("uiLibrary"),
        ContentEntry::new(
            "getValues",
            "getValues",
            "An optimized helper for reading form values. The difference between \
             `watch` and `getValues` is that `getValues` will not trigger \
             re-renders or subscribe to input changes.",
        )
        .with_signature("(payload?: string | string[]) => Object"),
        ContentEntry::new(
            "trigger",
            "trigger",
            "Manually triggers form or input validation. This method is also \
             useful when you have dependent validation (input validation depends \
             on another input's value).",
        )
        .with_signature("(name?: string | string[]) => Promise<boolean>"),
        ContentEntry::new(
            "control",
            "control",
            "This object contains methods for registering components into React \
             Hook Form. Pass it to the `Controller` wrapper to work with \
             controlled external components.",
        )
        .with_signature("Object")
        .with_sample("controlledComponent"),
    ]
}
