//! Literal code sample text shown on documentation pages.
//!
//! Samples are opaque display text: nothing here is ever parsed, compiled,
//! or executed. Each sample has a default (JS) body and, where authored, a
//! typed (TS) variant, plus external sandbox links per variant.

use crate::model::CodeSample;
use crate::registry::SampleStore;

pub const REGISTER: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

export default function App() {
  const { register, handleSubmit } = useForm();
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName")} />
      <select {...register("gender")}>
        <option value="female">female</option>
        <option value="male">male</option>
        <option value="other">other</option>
      </select>
      <input type="submit" />
    </form>
  );
}"#;

pub const REGISTER_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

enum GenderEnum {
  female = "female",
  male = "male",
  other = "other"
}

interface IFormInput {
  firstName: String;
  gender: GenderEnum;
}

export default function App() {
  const { register, handleSubmit } = useForm<IFormInput>();

  const onSubmit = (data: IFormInput) => {
    console.log(data)
  };

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <label>First Name</label>
      <input {...register("firstName")} />
      <label>Gender Selection</label>
      <select {...register("gender")}>
        <option value="female">female</option>
        <option value="male">male</option>
        <option value="other">other</option>
      </select>
      <input type="submit" />
    </form>
  );
}"#;

pub const APPLY_VALIDATION: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

export default function App() {
  const { register, handleSubmit } = useForm();
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true, maxLength: 20 })} />
      <input {...register("lastName", { pattern: /^[A-Za-z]+$/i })} />
      <input type="number" {...register("age", { min: 18, max: 99 })} />
      <input type="submit" />
    </form>
  );
}"#;

pub const APPLY_VALIDATION_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

interface IFormInput {
  firstName: string;
  lastName: string;
  age: number;
}

export default function App() {
  const { register, handleSubmit } = useForm<IFormInput>();
  const onSubmit = (data: IFormInput) => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true, maxLength: 20 })} />
      <input {...register("lastName", { pattern: /^[A-Za-z]+$/i })} />
      <input type="number" {...register("age", { min: 18, max: 99 })} />
      <input type="submit" />
    </form>
  );
}"#;

pub const ERRORS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

export default function App() {
  const { register, formState: { errors }, handleSubmit } = useForm();

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true })} />
      {errors.firstName && <p>First name is required</p>}
      <input {...register("lastName", { required: true })} />
      {errors.lastName && <p>Last name is required</p>}
      <input type="submit" />
    </form>
  );
}"#;

pub const ERRORS_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

interface IFormInputs {
  firstName: string
  lastName: string
}

export default function App() {
  const { register, formState: { errors }, handleSubmit } = useForm<IFormInputs>();

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true })} />
      {errors.firstName && <p>First name is required</p>}
      <input {...register("lastName", { required: true })} />
      {errors.lastName && <p>Last name is required</p>}
      <input type="submit" />
    </form>
  );
}"#;

pub const MIGRATE: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

// The following component is an example of your existing Input Component
const Input = ({ label, register, required }) => (
  <>
    <label>{label}</label>
    <input {...register(label, { required })} />
  </>
);

// you can use React.forwardRef to pass the ref too
const Select = React.forwardRef(({ label }, ref) => (
  <>
    <label>{label}</label>
    <select name={label} ref={ref}>
      <option value="20">20</option>
      <option value="30">30</option>
    </select>
  </>
));

export default function App() {
  const { register, handleSubmit } = useForm();
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <Input label="First Name" register={register} required />
      <Select label="Age" {...register("Age")} />
      <input type="submit" />
    </form>
  );
}"#;

pub const MIGRATE_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

type InputProps = {
  label: string;
  required?: boolean;
};

// The following component is an example of your existing Input Component
const Input = ({ label, register, required }: InputProps) => (
  <>
    <label>{label}</label>
    <input {...register(label, { required })} />
  </>
);

// you can use React.forwardRef to pass the ref too
const Select = React.forwardRef<HTMLSelectElement, { label: string }>(
  ({ label }, ref) => (
    <>
      <label>{label}</label>
      <select name={label} ref={ref}>
        <option value="20">20</option>
        <option value="30">30</option>
      </select>
    </>
  )
);

interface IFormValues {
  "First Name": string;
  Age: number;
}

const App = () => {
  const { register, handleSubmit } = useForm<IFormValues>();

  const onSubmit = (data: IFormValues) => {
    console.log(data)
  };

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <Input label="First Name" {...register("First Name")} required />
      <Select label="Age" {...register("Age")} />
      <input type="submit" />
    </form>
  );
};"#;

pub const UI_LIBRARY: &str = r#"import React from "react";
import { useForm } from "react-hook-form";
import Select from "react-select";
import Input from "@material-ui/core/Input";
import { Input as InputField } from "antd";

export default function App() {
  const { register, handleSubmit, setValue } = useForm();
  const onSubmit = data => console.log(data);

  const handleChange = (e) => {
    setValue("AntdInput", e.target.value);
  }

  React.useEffect(() => {
    register("AntdInput"); // custom register Antd input
  }, [register])

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <InputField name="name" onChange={handleChange} />
      <input type="submit" />
    </form>
  );
}"#;

pub const UI_LIBRARY_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";
import Select from "react-select";
import Input from "@material-ui/core/Input";
import { Input as InputField } from "antd";

interface IFormInput {
  name: string
}

export default function App() {
  const { register, handleSubmit, setValue } = useForm<IFormInput>();
  const onSubmit = (data: IFormInput) => console.log(data);

  const handleChange = (e) => {
    setValue("AntdInput", e.target.value);
  }

  React.useEffect(() => {
    register("AntdInput"); // custom register Antd input
  }, [register])

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <InputField name="name" onChange={handleChange} />
      <input type="submit" />
    </form>
  );
}"#;

pub const CONTROLLED_COMPONENT: &str = r#"import React from "react";
import { useForm, Controller } from "react-hook-form";
import ReactSelect from "react-select";
import { TextField, Checkbox } from "@material-ui/core";

function App() {
  const methods = useForm();
  const { handleSubmit, control, reset } = methods;
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <Controller
        name="MyCheckbox"
        control={control}
        defaultValue={false}
        rules={{ required: true }}
        render={({ field }) => <Checkbox {...field} />}
      />
    </form>
  );
}"#;

pub const CONTROLLED_COMPONENT_TS: &str = r#"import React from "react";
import { useForm, Controller } from "react-hook-form";
import ReactSelect from "react-select";
import { TextField, Checkbox } from "@material-ui/core";

interface IFormInputs {
  TextField: string
  MyCheckbox: boolean
}

function App() {
  const methods = useForm<IFormInputs>();
  const { handleSubmit, control, reset } = methods;
  const onSubmit = (data: IFormInputs) => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <Controller
        name="MyCheckbox"
        control={control}
        defaultValue={false}
        rules={{ required: true }}
        render={({ field }) => <Checkbox {...field} />}
      />
    </form>
  );
}"#;

pub const GLOBAL_STATE: &str = r#"import React from "react";
import { useForm } from "react-hook-form";
import { connect } from "react-redux";
import updateAction from "./actions";

export default function App(props) {
  const { register, handleSubmit, setValue } = useForm();
  // Submit your data into Redux store
  const onSubmit = data => props.updateAction(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <Input {...register("firstName")} defaultValue={props.firstName} />
      <Input {...register("lastName")} defaultValue={props.lastName} />
      <input type="submit" />
    </form>
  );
}

// Connect your component with redux
connect(({ firstName, lastName }) => ({ firstName, lastName }), updateAction)(YourForm);"#;

pub const CLEAR_ERROR: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

const App = () => {
  const { register, formState: { errors }, handleSubmit, clearErrors } = useForm();
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true })} />
      <input {...register("lastName", { required: true })} />
      <input {...register("username", { required: true })} />
      <button type="button" onClick={() => clearErrors("firstName")}>
        Clear First Name Errors
      </button>
      <button
        type="button"
        onClick={() => clearErrors(["firstName", "lastName"])}
      >
        Clear First and Last Name Errors
      </button>
      <button type="button" onClick={() => clearErrors()}>
        Clear All Errors
      </button>
      <input type="submit" />
    </form>
  );
};"#;

pub const CLEAR_ERROR_TS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

interface IFormInputs {
  firstName: string;
  lastName: string;
  username: string;
}

const App = () => {
  const { register, formState: { errors }, handleSubmit, clearErrors } = useForm<IFormInputs>();
  const onSubmit = (data: IFormInputs) => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      <input {...register("firstName", { required: true })} />
      <input {...register("lastName", { required: true })} />
      <input {...register("username", { required: true })} />
      <button type="button" onClick={() => clearErrors("firstName")}>
        Clear First Name Errors
      </button>
      <button
        type="button"
        onClick={() => clearErrors(["firstName", "lastName"])}
      >
        Clear First and Last Name Errors
      </button>
      <button type="button" onClick={() => clearErrors()}>
        Clear All Errors
      </button>
      <input type="submit" />
    </form>
  );
};"#;

pub const TOGGLE_FIELDS: &str = r#"import React from "react";
import { useForm } from "react-hook-form";

export default function App() {
  const { register, handleSubmit } = useForm();
  const [showLastName, setShowLastName] = React.useState(false);
  const onSubmit = data => console.log(data);

  return (
    <form onSubmit={handleSubmit(onSubmit)}>
      {showLastName ? (
        <input key="lastName" {...register("lastName")} />
      ) : (
        <input key="firstName" {...register("firstName")} />
      )}
      <button type="button" onClick={() => setShowLastName(!showLastName)}>
        Toggle
      </button>
      <input type="submit" />
    </form>
  );
}"#;

/// Build the sample store for the site.
pub fn store() -> SampleStore {
    let mut store = SampleStore::new();

    store.add(
        CodeSample::new("register", REGISTER)
            .with_typed(REGISTER_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-get-started-j5wxo")
            .with_typed_sandbox("https://codesandbox.io/s/react-hook-form-get-started-ts-5ksmm"),
    );
    store.add(
        CodeSample::new("applyValidation", APPLY_VALIDATION)
            .with_typed(APPLY_VALIDATION_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-apply-validation-q5m00")
            .with_typed_sandbox("https://codesandbox.io/s/react-hook-form-apply-validation-ts-forked-nmbyh"),
    );
    store.add(
        CodeSample::new("errors", ERRORS)
            .with_typed(ERRORS_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-handle-errors-2na7t"),
    );
    store.add(
        CodeSample::new("migrate", MIGRATE)
            .with_typed(MIGRATE_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-adapting-existing-form-llbnn"),
    );
    store.add(
        CodeSample::new("uiLibrary", UI_LIBRARY)
            .with_typed(UI_LIBRARY_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-with-ui-library-forked-fp5r3"),
    );
    store.add(
        CodeSample::new("controlledComponent", CONTROLLED_COMPONENT)
            .with_typed(CONTROLLED_COMPONENT_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-v6-controller-qsd8r"),
    );
    store.add(
        CodeSample::new("globalState", GLOBAL_STATE)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-integrate-global-state-qjvwo"),
    );
    store.add(
        CodeSample::new("clearError", CLEAR_ERROR)
            .with_typed(CLEAR_ERROR_TS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-v6-clearerrors-887rh")
            .with_typed_sandbox("https://codesandbox.io/s/react-hook-form-v6-ts-clearerrors-0zry5"),
    );
    store.add(
        CodeSample::new("toggleFields", TOGGLE_FIELDS)
            .with_sandbox("https://codesandbox.io/s/react-hook-form-faq-toggle-fields-3htr6"),
    );

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SampleVariant;

    #[test]
    fn store_has_unique_keys() {
        let store = store();
        let keys: Vec<_> = store.iter().map(|s| s.key.as_str()).collect();
        let mut deduped = keys.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn clear_error_sample_has_both_variants() {
        let store = store();
        let sample = store.get("clearError").unwrap();
        assert!(sample.typed_body.is_some());
        assert!(sample.sandbox_url.is_some());
        assert!(sample.typed_sandbox_url.is_some());
        assert_ne!(
            store.resolve("clearError", SampleVariant::Default).unwrap(),
            store.resolve("clearError", SampleVariant::Typed).unwrap(),
        );
    }

    #[test]
    fn global_state_sample_falls_back_for_typed() {
        let store = store();
        assert_eq!(
            store.resolve("globalState", SampleVariant::Typed).unwrap(),
            GLOBAL_STATE
        );
    }
}
