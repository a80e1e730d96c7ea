//! FAQ entries, in the order they appear on the FAQ page.

use crate::model::ContentEntry;

pub(super) fn entries() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new(
            "faq-performance",
            "Performance of React Hook Form",
            "Performance is one of the primary reasons why this library was \
             created. React Hook Form relies on uncontrolled components, which \
             is the reason why the `register` function captures `ref`. This \
             approach reduces the amount of re-rendering that occurs due to a \
             user typing in an input or other form values changing. Components \
             mount to the page faster than controlled components because they \
             have less overhead.",
        )
        .with_link(
            "Performance comparison test",
            "https://github.com/bluebill1049/react-hook-form-performance-compare",
        ),
        ContentEntry::new(
            "faq-accessibility",
            "How to create an accessible input error and message?",
            "React Hook Form is based on Uncontrolled Components, which gives \
             you the ability to build an accessible custom form easily. Link \
             your error message to the input with `aria-describedby` and flag \
             invalid fields with `aria-invalid`.",
        )
        .with_link(
            "Uncontrolled Components",
            "https://reactjs.org/docs/uncontrolled-components.html",
        ),
        ContentEntry::new(
            "faq-class-components",
            "Does it work with Class Components?",
            "No, not out of the box. If you wanted to do this, you could build a \
             wrapper around it and use it in your Class Component.\n\n\
             > You can't use Hooks inside of a class component, but you can \
             definitely mix classes and function components with Hooks in a \
             single tree.",
        ),
        ContentEntry::new(
            "faq-reset-form",
            "How to reset the form?",
            "There are two methods to clear the form:\n\n\
             - **HTMLFormElement.reset()**: this method does the same thing as \
             clicking a form's reset button, and only clears \
             `input/select/checkbox` values.\n\
             - **React Hook Form API: `reset()`**: React Hook Form's `reset` \
             method will reset all field values, and will also clear all \
             `errors` within the form.",
        ),
        ContentEntry::new(
            "faq-initialize-values",
            "How to initialize form values?",
            "Being that React Hook Form relies on uncontrolled components, you \
             can specify a `defaultValue` or `defaultChecked` to an individual \
             field. However, it is more common to initialize a form by passing \
             `defaultValues` to `useForm`.",
        ),
        ContentEntry::new(
            "faq-share-ref",
            "How to share ref usage?",
            "React Hook Form needs a `ref` to collect the input value, however, \
             you may want to use `ref` for other purposes (e.g. scroll into the \
             view, or focus). Assign the register's `ref` callback and your own \
             ref inside a single callback ref.",
        ),
        ContentEntry::new(
            "faq-no-ref-access",
            "What if you don't have access to ref?",
            "You can actually `register` an input without a `ref`. In fact, you \
             can manually `setValue`, `setError` and `trigger`.\n\n\
             **Note:** because `ref` has not been registered, React Hook Form \
             won't be able to register event listeners to the inputs. This means \
             you will have to manually update value and error.",
        ),
        ContentEntry::new(
            "faq-first-keystroke",
            "Why is the first keystroke not working?",
            "Double check if you are using `value` instead of `defaultValue`.\n\n\
             React Hook Form is based on uncontrolled inputs, which means you \
             don't need to change the input value via state via `onChange`. You \
             only need to set `defaultValue` for the initial input value.",
        ),
        ContentEntry::new(
            "faq-library-comparison",
            "React Hook Form, Formik or Redux Form?",
            "First of all, all libs try to solve the same problem: make the form \
             building experience as easy as possible. However, there are some \
             fundamental differences between the three: react-hook-form is \
             built with uncontrolled inputs in mind and tries to provide your \
             form with the best performance and least amount of re-renders as \
             possible. On top of that, react-hook-form is built with React \
             Hooks and used as a hook, which means there is no component for \
             you to import.\n\n\
             Package size: react-hook-form **8KB**, formik **15KB**, redux-form \
             **26.4KB**. Validation: built-in, plus schema libraries such as \
             Yup, Zod, Joi and Superstruct.",
        )
        .with_link("Yup", "https://github.com/jquense/yup")
        .with_link("Zod", "https://github.com/vriad/zod"),
        ContentEntry::new(
            "faq-watch-getvalues-state",
            "watch vs getValues vs state",
            "- **watch**: subscribe to either all inputs or the specified inputs \
             changes via event listener and re-render based on which fields are \
             subscribed.\n\
             - **getValues**: get values that are stored inside the custom hook \
             as reference, fast and cheap. This method doesn't trigger \
             re-render.\n\
             - **local state**: React local state represents more than just an \
             input's state and also decides what to render. This will trigger on \
             each input's change.",
        )
        .with_link(
            "watch behaviour codesandbox",
            "https://codesandbox.io/s/react-hook-form-watch-with-radio-buttons-and-select-examples-ovfus",
        ),
        ContentEntry::new(
            "faq-default-value-ternary",
            "Why is default value not changing correctly with ternary operator?",
            "React Hook Form doesn't control your entire form and inputs, which \
             is the reason why React wouldn't recognize that the actual input \
             has been exchanged or swapped. As a solution, you can resolve this \
             problem by giving a unique `key` prop to your input.",
        )
        .with_sample("toggleFields")
        .with_link(
            "Understanding React's key prop",
            "https://kentcdodds.com/blog/understanding-reacts-key-prop",
        ),
        ContentEntry::new(
            "faq-modal-tab-forms",
            "How to work with modal or tab forms?",
            "It's important to understand that React Hook Form embraces native \
             form behavior by storing input state inside each input. One of the \
             common misconceptions is that when working with modal or tab \
             forms, by mounting and unmounting form/inputs that inputs' state \
             will remain. That is incorrect. Instead, the correct solution would \
             be to build a new form for your form inside each modal or tab and \
             capture your submission data in local or global state and then do \
             something with the combined data.",
        )
        .with_link(
            "Modal form and toggle inputs example",
            "https://codesandbox.io/s/react-hook-form-modal-form-conditional-inputs-c7n0r",
        )
        .with_link("Tab form example", "https://codesandbox.io/s/tabs-760h9"),
    ]
}
